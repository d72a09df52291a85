use std::fmt::{self, Display};

/// Errors reported by the fallible constructors and checks of this crate.
///
/// The algebraic operations themselves are total; only explicit tables of
/// values and finite property checks can fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// An arithmetic function table assigns a non-zero value to `0`.
    NonZeroAtZero,
    /// A function expected to be multiplicative is not `1` at `1`.
    NotUnitAtOne,
    /// `f(m * n) != f(m) * f(n)` for the coprime pair `(m, n)`.
    NotMultiplicative { m: u64, n: u64 },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonZeroAtZero => {
                f.write_str("arithmetic functions must vanish at 0")
            }
            Self::NotUnitAtOne => {
                f.write_str("multiplicative functions must map 1 to 1")
            }
            Self::NotMultiplicative { m, n } => {
                write!(f, "f({m} * {n}) differs from f({m}) * f({n}) for coprime {m} and {n}")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T, E = Error> = std::result::Result<T, E>;
