//! Arithmetic functions and the Dirichlet ring.
//!
//! An arithmetic function is any function `ℕ -> R` with `f(0) = 0`.  Unlike
//! the convolution algebras in [`crate::algebra`] it need not have finite
//! support; the Dirichlet product is still well defined because each of
//! its values sums over the finitely many divisor pairs of one input:
//!
//! ```text
//! (f * g)(n) = Σ_{d * e = n} f(d) * g(e),    (f * g)(0) = 0
//! ```

mod divisors;
mod special;

pub use divisors::{coprime, divisors, divisors_antidiagonal, factorize};
pub use special::{card_distinct_factors, card_factors, id, moebius, pow, sigma, zeta};

use crate::{
    algebra::{FiniteMap, GroupValue, MonoidValue, OrdFiniteMap, SemiringValue},
    Error, Result,
};
use log::trace;
use std::{
    fmt::{self, Debug},
    ops::{Add, Mul, Neg, Sub},
    sync::Arc,
};

/// A function `ℕ -> R` that vanishes at `0`.
///
/// Values are computed on demand; cloning shares the underlying function.
pub struct ArithmeticFunction<R> {
    eval: Arc<dyn Fn(u64) -> R + Send + Sync>,
}

impl<R> Clone for ArithmeticFunction<R> {
    fn clone(&self) -> Self {
        Self {
            eval: self.eval.clone(),
        }
    }
}

impl<R> Debug for ArithmeticFunction<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArithmeticFunction").finish_non_exhaustive()
    }
}

impl<R> ArithmeticFunction<R>
where
    R: MonoidValue,
{
    /// Wraps `f`.  The value at `0` is zero whatever `f` returns there.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(u64) -> R + Send + Sync + 'static,
    {
        Self {
            eval: Arc::new(move |n| if n == 0 { R::zero() } else { f(n) }),
        }
    }

    /// Function with the given values at `0, 1, 2, ...` and zero past the
    /// end of the table.
    pub fn try_from_values(values: Vec<R>) -> Result<Self>
    where
        R: Send + Sync,
    {
        if values.first().map_or(false, |v| !v.is_zero()) {
            return Err(Error::NonZeroAtZero);
        }

        Ok(Self::from_fn(move |n| {
            usize::try_from(n)
                .ok()
                .and_then(|i| values.get(i))
                .cloned()
                .unwrap_or_else(R::zero)
        }))
    }

    /// The finitely supported function given by `map`.  A value stored at
    /// key `0` is ignored.
    pub fn from_finite_map(map: OrdFiniteMap<u64, R>) -> Self
    where
        R: Send + Sync,
    {
        Self::from_fn(move |n| map.evaluate(&n))
    }

    /// The function that is zero everywhere.
    pub fn zero() -> Self {
        Self::from_fn(|_| R::zero())
    }

    pub fn evaluate(&self, n: u64) -> R {
        (self.eval)(n)
    }

    /// Values at `0..=upto`.
    pub fn tabulate(&self, upto: u64) -> Vec<R> {
        (0..=upto).map(|n| self.evaluate(n)).collect()
    }

    /// Restriction to `1..=upto` as a finite map.
    pub fn to_finite_map(&self, upto: u64) -> OrdFiniteMap<u64, R> {
        (1..=upto).map(|n| (n, self.evaluate(n))).collect()
    }

    /// True when `self` and `other` agree on `0..=upto`.
    pub fn agrees_up_to(&self, other: &Self, upto: u64) -> bool {
        (0..=upto).all(|n| self.evaluate(n) == other.evaluate(n))
    }

    /// Applies `f` to every value.
    pub fn map_values<S, F>(&self, f: F) -> ArithmeticFunction<S>
    where
        S: MonoidValue,
        F: Fn(R) -> S + Send + Sync + 'static,
    {
        let this = self.clone();
        ArithmeticFunction::from_fn(move |n| f(this.evaluate(n)))
    }
}

impl<R> ArithmeticFunction<R>
where
    R: SemiringValue,
{
    /// The unit of the Dirichlet ring: `1` at `1`, zero elsewhere.
    pub fn one() -> Self {
        Self::from_fn(|n| if n == 1 { R::one() } else { R::zero() })
    }

    /// Dirichlet convolution.
    pub fn dirichlet(&self, rhs: &Self) -> Self {
        trace!("building Dirichlet product");

        let (f, g) = (self.clone(), rhs.clone());
        Self::from_fn(move |n| {
            if n == 0 {
                // 0 has no finite set of divisor pairs.
                return R::zero();
            }

            let mut acc = R::zero();
            for (d, e) in divisors_antidiagonal(n) {
                acc += f.evaluate(d).mul_by_ref(&g.evaluate(e));
            }
            acc
        })
    }

    /// Left scalar action.
    pub fn smul(&self, r: &R) -> Self
    where
        R: Send + Sync,
    {
        let (this, r) = (self.clone(), r.clone());
        Self::from_fn(move |n| r.mul_by_ref(&this.evaluate(n)))
    }

    /// Point-wise product.
    pub fn pmul(&self, rhs: &Self) -> Self {
        let (f, g) = (self.clone(), rhs.clone());
        Self::from_fn(move |n| f.evaluate(n).mul_by_ref(&g.evaluate(n)))
    }

    /// Point-wise power.  `ppow(0)` is `1` at every positive integer.
    pub fn ppow(&self, exp: usize) -> Self {
        let this = self.clone();
        Self::from_fn(move |n| num::pow(this.evaluate(n), exp))
    }

    /// Checks multiplicativity on `1..=upto`: `f(1) = 1` and
    /// `f(m * n) = f(m) * f(n)` for coprime `m`, `n` with `m * n <= upto`.
    ///
    /// Reports the first counterexample.
    pub fn check_multiplicative(&self, upto: u64) -> Result<()> {
        if upto >= 1 && !self.evaluate(1).is_one() {
            return Err(Error::NotUnitAtOne);
        }

        for m in 2..=upto {
            for n in 2..=upto / m {
                if coprime(m, n)
                    && self.evaluate(m * n) != self.evaluate(m).mul_by_ref(&self.evaluate(n))
                {
                    return Err(Error::NotMultiplicative { m, n });
                }
            }
        }

        Ok(())
    }

    pub fn is_multiplicative_up_to(&self, upto: u64) -> bool {
        self.check_multiplicative(upto).is_ok()
    }
}

impl<R> Add for ArithmeticFunction<R>
where
    R: MonoidValue,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<'a, R> Add<&'a ArithmeticFunction<R>> for &'a ArithmeticFunction<R>
where
    R: MonoidValue,
{
    type Output = ArithmeticFunction<R>;

    fn add(self, rhs: Self) -> Self::Output {
        let (f, g) = (self.clone(), rhs.clone());
        ArithmeticFunction::from_fn(move |n| f.evaluate(n) + g.evaluate(n))
    }
}

impl<R> Neg for ArithmeticFunction<R>
where
    R: GroupValue,
{
    type Output = Self;

    fn neg(self) -> Self {
        ArithmeticFunction::from_fn(move |n| -self.evaluate(n))
    }
}

impl<R> Sub for ArithmeticFunction<R>
where
    R: GroupValue,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<R> Mul for ArithmeticFunction<R>
where
    R: SemiringValue,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.dirichlet(&rhs)
    }
}

impl<'a, R> Mul<&'a ArithmeticFunction<R>> for &'a ArithmeticFunction<R>
where
    R: SemiringValue,
{
    type Output = ArithmeticFunction<R>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.dirichlet(rhs)
    }
}
