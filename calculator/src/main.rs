//! Command line front end for polynomial and Dirichlet products.

use anyhow::Result as AnyResult;
use clap::{Parser, Subcommand, ValueEnum};
use convalg::{arithmetic_function, ArithmeticFunction, FiniteMap};
use log::info;
use std::path::PathBuf;

mod config;

use config::{Poly, PolyConfig};

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Multiply the polynomials described in a YAML file
    Poly {
        #[clap(long, env = "CONVALG_CONFIG", help = "Path to the YAML job file")]
        config: PathBuf,
    },
    /// Tabulate the Dirichlet product of two named arithmetic functions
    Dirichlet {
        #[clap(value_enum)]
        left: Named,
        #[clap(value_enum)]
        right: Named,
        #[clap(long, default_value = "20", help = "Largest argument to print")]
        upto: u64,
        #[clap(long, help = "Also check multiplicativity up to the bound")]
        check_multiplicative: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Named {
    Zeta,
    One,
    Id,
    Moebius,
    /// Number of divisors
    Sigma0,
    /// Sum of divisors
    Sigma1,
    /// Number of prime factors with multiplicity
    BigOmega,
    /// Number of distinct prime factors
    Omega,
}

impl Named {
    fn function(self) -> ArithmeticFunction<i64> {
        let to_signed = |v: u64| v as i64;
        match self {
            Self::Zeta => arithmetic_function::zeta(),
            Self::One => ArithmeticFunction::one(),
            Self::Id => arithmetic_function::id().map_values(to_signed),
            Self::Moebius => arithmetic_function::moebius(),
            Self::Sigma0 => arithmetic_function::sigma(0).map_values(to_signed),
            Self::Sigma1 => arithmetic_function::sigma(1).map_values(to_signed),
            Self::BigOmega => arithmetic_function::card_factors().map_values(to_signed),
            Self::Omega => arithmetic_function::card_distinct_factors().map_values(to_signed),
        }
    }
}

/// Renders `poly` in the usual notation, lowest degree first.
fn render(poly: &Poly, variable: &str) -> String {
    if poly.support_len() == 0 {
        return "0".to_string();
    }

    let mut out = String::new();
    for (i, (exponent, coefficient)) in poly.iter().enumerate() {
        let magnitude = coefficient.unsigned_abs();
        if i == 0 {
            if *coefficient < 0 {
                out.push('-');
            }
        } else {
            out.push_str(if *coefficient < 0 { " - " } else { " + " });
        }

        if magnitude != 1 || *exponent == 0 {
            out.push_str(&magnitude.to_string());
        }
        match exponent {
            0 => {}
            1 => out.push_str(variable),
            _ => out.push_str(&format!("{variable}^{exponent}")),
        }
    }
    out
}

fn run_poly(config: &PolyConfig) -> AnyResult<()> {
    info!(
        "multiplying {} x {} terms",
        config.left.support_len(),
        config.right.support_len()
    );

    let product = config.product();
    println!("{}", render(&product, &config.variable));
    if let Some(degree) = product.max_key() {
        println!("degree: {degree}");
    }
    if let Some(point) = config.evaluation_point()? {
        println!("value at {point}: {}", product.eval(&point));
    }
    Ok(())
}

fn run_dirichlet(left: Named, right: Named, upto: u64, check_multiplicative: bool) -> AnyResult<()> {
    info!("tabulating {left:?} * {right:?} up to {upto}");

    let product = left.function() * right.function();
    for (n, value) in product.tabulate(upto).into_iter().enumerate().skip(1) {
        println!("{n}\t{value}");
    }

    if check_multiplicative {
        product.check_multiplicative(upto)?;
        println!("multiplicative up to {upto}");
    }
    Ok(())
}

fn main() -> AnyResult<()> {
    env_logger::init();

    match Args::parse().command {
        Command::Poly { config } => run_poly(&PolyConfig::from_file(&config)?),
        Command::Dirichlet {
            left,
            right,
            upto,
            check_multiplicative,
        } => run_dirichlet(left, right, upto, check_multiplicative),
    }
}

#[cfg(test)]
mod tests {
    use super::{render, Args, Named, Poly};
    use clap::{CommandFactory, ValueEnum};
    use convalg::convolution;

    #[test]
    fn rendering() {
        let f: Poly = convolution! { 0 => 3, 1 => -1, 2 => 2, 5 => 1 };
        assert_eq!(render(&f, "x"), "3 - x + 2x^2 + x^5");
        let g: Poly = convolution! { 1 => -4 };
        assert_eq!(render(&g, "t"), "-4t");
        assert_eq!(render(&Poly::default(), "x"), "0");
        assert_eq!(render(&convolution! { 0 => -1 }, "x"), "-1");
    }

    #[test]
    fn named_functions() {
        let one = Named::One.function();
        let inverse = Named::Moebius.function() * Named::Zeta.function();
        assert!(inverse.agrees_up_to(&one, 100));

        let sigma = Named::Zeta.function() * Named::Id.function();
        assert!(sigma.agrees_up_to(&Named::Sigma1.function(), 100));

        for named in Named::value_variants() {
            assert_eq!(named.function().evaluate(0), 0);
        }
    }

    #[test]
    fn arguments() {
        Args::command().debug_assert();
    }
}
