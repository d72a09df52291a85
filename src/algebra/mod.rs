/*
MIT License
SPDX-License-Identifier: MIT

Copyright (c) 2021 VMware, Inc
*/

//! This module contains declarations of abstract algebraic concepts:
//! monoids, groups, semirings, rings and algebras over them, together with
//! the finite maps and convolution algebras built from those concepts.

pub mod convolution;
pub mod finite_map;
mod free_monoid;
mod zmod;

pub use convolution::{
    lift,
    lift::{ext_on_generators, ext_on_support, restrict, AlgebraHom, FnHom, Lift, MonoidHom},
    AddMonoidAlgebra, Additive, ConvolutionAlgebra, KeyCommutative, KeyGroup, KeyMonoid,
    MonoidAlgebra, Multiplicative,
};
pub use finite_map::{FiniteMap, OrdFiniteMap};
pub use free_monoid::FreeMonoid;
pub use zmod::ZMod;

use num::{rational::Ratio, BigInt, BigUint, Integer, One, Zero};
use std::ops::{Add, AddAssign, Mul, Neg};

/// Addition that borrows both operands.
pub trait AddByRef {
    fn add_by_ref(&self, other: &Self) -> Self;
}

impl<T> AddByRef for T
where
    for<'a> &'a T: Add<&'a T, Output = T>,
{
    #[inline]
    fn add_by_ref(&self, other: &Self) -> Self {
        self + other
    }
}

/// In-place addition of a borrowed value.
pub trait AddAssignByRef {
    fn add_assign_by_ref(&mut self, other: &Self);
}

impl<T> AddAssignByRef for T
where
    for<'a> T: AddAssign<&'a T>,
{
    #[inline]
    fn add_assign_by_ref(&mut self, other: &Self) {
        *self += other;
    }
}

/// Negation of a borrowed value.
pub trait NegByRef {
    fn neg_by_ref(&self) -> Self;
}

impl<T> NegByRef for T
where
    for<'a> &'a T: Neg<Output = T>,
{
    #[inline]
    fn neg_by_ref(&self) -> Self {
        -self
    }
}

/// Multiplication that borrows both operands.
pub trait MulByRef {
    fn mul_by_ref(&self, other: &Self) -> Self;
}

impl<T> MulByRef for T
where
    for<'a> &'a T: Mul<&'a T, Output = T>,
{
    #[inline]
    fn mul_by_ref(&self, other: &Self) -> Self {
        self * other
    }
}

/// A type with an associative, commutative addition and a zero.
/// We trust the implementation to have an associative addition.
/// This contains methods 'is_zero', 'zero' and 'add'
pub trait MonoidValue:
    Clone + Eq + 'static + Add<Output = Self> + Zero + AddAssign + AddByRef + AddAssignByRef
{
}

/// Default implementation for all types that have an addition.
impl<T> MonoidValue for T where
    T: Clone + Eq + 'static + Add<Output = Self> + Zero + AddAssign + AddByRef + AddAssignByRef
{
}

/// A `MonoidValue` with negation.
/// In addition we expect all our groups to be commutative.
/// This adds the 'neg' method to the MonoidValue methods.
pub trait GroupValue: MonoidValue + Neg<Output = Self> + NegByRef {}

/// Default implementation for all types that have the required traits.
impl<T> GroupValue for T where T: MonoidValue + Neg<Output = Self> + NegByRef {}

/// A `MonoidValue` with an associative multiplication that distributes
/// over addition and has a unit.
///
/// Multiplication is not required to be commutative; see [`Commutative`].
pub trait SemiringValue: MonoidValue + Mul<Output = Self> + One + MulByRef {}

/// Default implementation for all types that have the required traits.
impl<T> SemiringValue for T where T: MonoidValue + Mul<Output = Self> + One + MulByRef {}

/// A semiring with additive inverses.
pub trait RingValue: SemiringValue + GroupValue {}

/// Default implementation for all types that have the required traits.
impl<T> RingValue for T where T: SemiringValue + GroupValue {}

/// Marker for types whose addition and multiplication (where defined)
/// are both commutative.
///
/// The compiler cannot check this property, so the marker is only
/// implemented for types known to satisfy it.
pub trait Commutative {}

macro_rules! commutative_primitives {
    ($($t:ty),* $(,)?) => {
        $(impl Commutative for $t {})*
    };
}

commutative_primitives!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Commutative for BigInt {}
impl Commutative for BigUint {}
impl<T> Commutative for Ratio<T> where T: Commutative {}

/// A semiring `Self` that is an algebra over the semiring `R`: it comes
/// with a structure map `R -> Self` and a left action of `R` on `Self`.
///
/// Implementations must satisfy `smul(r, a) == algebra_map(r) * a`.
pub trait Algebra<R>: SemiringValue
where
    R: SemiringValue,
{
    /// Image of a scalar.
    fn algebra_map(r: &R) -> Self;

    /// Left scalar action.
    fn smul(r: &R, a: &Self) -> Self {
        Self::algebra_map(r).mul_by_ref(a)
    }
}

/// Every semiring is an algebra over itself.
impl<R> Algebra<R> for R
where
    R: SemiringValue,
{
    #[inline]
    fn algebra_map(r: &R) -> Self {
        r.clone()
    }

    #[inline]
    fn smul(r: &R, a: &Self) -> Self {
        r.mul_by_ref(a)
    }
}

/// Rationals are an algebra over their integers.
impl<T> Algebra<T> for Ratio<T>
where
    T: SemiringValue + Integer,
    Ratio<T>: SemiringValue,
{
    #[inline]
    fn algebra_map(r: &T) -> Self {
        Ratio::from_integer(r.clone())
    }
}
