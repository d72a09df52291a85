//! Integers modulo `N`.

use crate::algebra::Commutative;
use num::{One, Zero};
use std::{
    fmt::{self, Display},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub},
};

/// Residue class of integers modulo `N`, stored as its least non-negative
/// representative.
///
/// `ZMod<N>` is a commutative ring; it serves both as a finite cyclic key
/// group (under addition) and as a coefficient ring with zero divisors
/// when `N` is composite.
///
/// `N` must be positive.  Every constructor checks this when the type is
/// instantiated, so `ZMod<0>` does not build:
///
/// ```compile_fail
/// use convalg::algebra::ZMod;
///
/// let _ = ZMod::<0>::new(1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZMod<const N: u64> {
    value: u64,
}

impl<const N: u64> ZMod<N> {
    const POSITIVE_MODULUS: () = assert!(N > 0, "ZMod<N> requires a positive modulus N");

    pub const fn new(value: u64) -> Self {
        let () = Self::POSITIVE_MODULUS;
        Self { value: value % N }
    }

    /// Residue of a signed integer.
    pub const fn from_i64(value: i64) -> Self {
        let () = Self::POSITIVE_MODULUS;
        Self {
            value: (value as i128).rem_euclid(N as i128) as u64,
        }
    }

    pub const fn value(&self) -> u64 {
        self.value
    }

    pub const fn modulus() -> u64 {
        N
    }
}

impl<const N: u64> Add for ZMod<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        // Widen so that moduli close to `u64::MAX` cannot overflow.
        Self {
            value: ((self.value as u128 + rhs.value as u128) % N as u128) as u64,
        }
    }
}

impl<'a, const N: u64> Add<&'a ZMod<N>> for &'a ZMod<N> {
    type Output = ZMod<N>;

    fn add(self, rhs: Self) -> ZMod<N> {
        *self + *rhs
    }
}

impl<const N: u64> AddAssign for ZMod<N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<'a, const N: u64> AddAssign<&'a ZMod<N>> for ZMod<N> {
    fn add_assign(&mut self, rhs: &'a Self) {
        *self = *self + *rhs;
    }
}

impl<const N: u64> Neg for ZMod<N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            value: (N - self.value) % N,
        }
    }
}

impl<'a, const N: u64> Neg for &'a ZMod<N> {
    type Output = ZMod<N>;

    fn neg(self) -> ZMod<N> {
        -*self
    }
}

impl<const N: u64> Sub for ZMod<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<const N: u64> Mul for ZMod<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            value: ((self.value as u128 * rhs.value as u128) % N as u128) as u64,
        }
    }
}

impl<'a, const N: u64> Mul<&'a ZMod<N>> for &'a ZMod<N> {
    type Output = ZMod<N>;

    fn mul(self, rhs: Self) -> ZMod<N> {
        *self * *rhs
    }
}

impl<const N: u64> MulAssign for ZMod<N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const N: u64> Default for ZMod<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: u64> Zero for ZMod<N> {
    fn zero() -> Self {
        Self::new(0)
    }

    fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl<const N: u64> One for ZMod<N> {
    fn one() -> Self {
        Self::new(1)
    }
}

impl<const N: u64> Commutative for ZMod<N> {}

impl<const N: u64> Display for ZMod<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
