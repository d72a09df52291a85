use anyhow::{Error as AnyError, Result as AnyResult};
use convalg::AddMonoidAlgebra;
use num::rational::Ratio;
use serde::Deserialize;
use std::{fs, path::Path};

pub(crate) type Poly = AddMonoidAlgebra<u64, i64>;

const fn default_power() -> usize {
    1
}

fn default_variable() -> String {
    "x".to_string()
}

/// Polynomial job read from a YAML file.
///
/// Polynomials are lists of `[exponent, coefficient]` pairs; repeated
/// exponents are summed.
///
/// ```yaml
/// left: [[0, 3], [1, 2]]
/// right: [[1, 1]]
/// evaluate_at: "1/2"
/// ```
#[derive(Deserialize, Clone, Debug)]
pub(crate) struct PolyConfig {
    pub left: Poly,
    #[serde(default = "Poly::default")]
    pub right: Poly,
    /// Raise the product to this power before printing it.
    #[serde(default = "default_power")]
    pub power: usize,
    #[serde(default = "default_variable")]
    pub variable: String,
    /// Rational evaluation point, e.g. `"-3/4"`.
    pub evaluate_at: Option<String>,
}

impl PolyConfig {
    pub(crate) fn from_file(path: &Path) -> AnyResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            AnyError::msg(format!(
                "unable to read configuration file '{}': {e}",
                path.display()
            ))
        })?;

        Self::from_yaml(&text).map_err(|e| {
            AnyError::msg(format!(
                "invalid configuration file '{}': {e}",
                path.display()
            ))
        })
    }

    pub(crate) fn from_yaml(text: &str) -> AnyResult<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        if config.variable.is_empty() {
            return Err(AnyError::msg("variable name must not be empty"));
        }
        Ok(config)
    }

    /// `left` times `right` when `right` is given, `left` otherwise, raised
    /// to `power`.
    pub(crate) fn product(&self) -> Poly {
        let base = if self.right.as_map().is_empty() {
            self.left.clone()
        } else {
            &self.left * &self.right
        };
        base.pow(self.power)
    }

    pub(crate) fn evaluation_point(&self) -> AnyResult<Option<Ratio<i64>>> {
        self.evaluate_at
            .as_deref()
            .map(|point| {
                point.trim().parse::<Ratio<i64>>().map_err(|e| {
                    AnyError::msg(format!("invalid evaluation point '{point}': {e}"))
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::{Poly, PolyConfig};
    use convalg::convolution;
    use num::rational::Ratio;

    #[test]
    fn defaults() {
        let config = PolyConfig::from_yaml("left: [[0, 3], [1, 2], [1, 1]]").unwrap();
        assert_eq!(config.left, convolution! { 0 => 3, 1 => 3 });
        assert_eq!(config.right, Poly::default());
        assert_eq!(config.power, 1);
        assert_eq!(config.variable, "x");
        assert_eq!(config.evaluation_point().unwrap(), None);
        assert_eq!(config.product(), config.left);
    }

    #[test]
    fn product_and_evaluation() {
        let config = PolyConfig::from_yaml(
            "left: [[0, 3], [1, 2]]\nright: [[1, 1]]\npower: 2\nevaluate_at: \"1/2\"\n",
        )
        .unwrap();
        assert_eq!(config.product(), convolution! { 2 => 9, 3 => 12, 4 => 4 });
        let point = config.evaluation_point().unwrap().unwrap();
        assert_eq!(point, Ratio::new(1, 2));
        assert_eq!(config.product().eval(&point), Ratio::from_integer(4));
    }

    #[test]
    fn errors() {
        assert!(PolyConfig::from_yaml("right: [[1, 1]]").is_err());
        assert!(PolyConfig::from_yaml("left: [[0, 1]]\nvariable: \"\"").is_err());

        let config = PolyConfig::from_yaml("left: [[0, 1]]\nevaluate_at: \"1/0x\"").unwrap();
        assert!(config.evaluation_point().is_err());
    }
}
