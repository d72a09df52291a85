//! Convolution algebras over finite maps.
//!
//! A [`ConvolutionAlgebra`] is a finite map from keys to coefficients in a
//! semiring.  Addition is point-wise; multiplication convolves the two
//! operands through a combination rule on keys:
//!
//! ```text
//! (f * g)(x) = Σ_{a1 ∈ supp f} Σ_{a2 ∈ supp g} [a1·a2 = x] f(a1) * g(a2)
//! ```
//!
//! The rule is a zero-sized type parameter: [`Multiplicative`] combines
//! keys with `*` ([`MonoidAlgebra`]) and [`Additive`] combines them with
//! `+` ([`AddMonoidAlgebra`], e.g. polynomials when keys are `u64`).

pub mod lift;

use self::lift::AlgebraHom;
use crate::{
    algebra::{
        finite_map::{FiniteMap, OrdFiniteMap},
        Algebra, Commutative, GroupValue, MonoidValue, SemiringValue,
    },
    layers::UnorderedLeafBuilder,
};
use log::trace;
use num::{traits::Inv, One, Zero};
use std::{
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, Neg, Sub},
};

/// A rule combining keys into a monoid: an associative operation with an
/// identity.  The operation need not be commutative.
pub trait KeyMonoid<K> {
    /// Identity key.
    fn identity() -> K;

    /// Combines `left` and `right`, in that order.
    fn combine(left: &K, right: &K) -> K;
}

/// A [`KeyMonoid`] in which every key has an inverse.
pub trait KeyGroup<K>: KeyMonoid<K> {
    fn inverse(key: &K) -> K;
}

/// A [`KeyMonoid`] whose operation is commutative.
pub trait KeyCommutative<K>: KeyMonoid<K> {}

/// Keys combine through `Mul`, with `One` as the identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Multiplicative;

/// Keys combine through `Add`, with `Zero` as the identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Additive;

impl<K> KeyMonoid<K> for Multiplicative
where
    K: Clone + One + Mul<Output = K>,
{
    fn identity() -> K {
        K::one()
    }

    fn combine(left: &K, right: &K) -> K {
        left.clone() * right.clone()
    }
}

impl<K> KeyGroup<K> for Multiplicative
where
    K: Clone + One + Mul<Output = K> + Inv<Output = K>,
{
    fn inverse(key: &K) -> K {
        key.clone().inv()
    }
}

impl<K> KeyCommutative<K> for Multiplicative where K: Clone + One + Mul<Output = K> + Commutative {}

impl<K> KeyMonoid<K> for Additive
where
    K: Clone + Zero + Add<Output = K>,
{
    fn identity() -> K {
        K::zero()
    }

    fn combine(left: &K, right: &K) -> K {
        left.clone() + right.clone()
    }
}

impl<K> KeyGroup<K> for Additive
where
    K: Clone + Zero + Add<Output = K> + Neg<Output = K>,
{
    fn inverse(key: &K) -> K {
        -key.clone()
    }
}

impl<K> KeyCommutative<K> for Additive where K: Clone + Zero + Add<Output = K> + Commutative {}

/// Convolution algebra with keys `K`, coefficients `R` and combination
/// rule `C`.
///
/// Values are immutable in spirit: every operation returns a new element.
/// Equality is point-wise equality of the underlying functions.
pub struct ConvolutionAlgebra<K, R, C> {
    map: OrdFiniteMap<K, R>,
    _rule: PhantomData<C>,
}

/// The monoid algebra `R[K]`, with keys multiplied.
pub type MonoidAlgebra<K, R> = ConvolutionAlgebra<K, R, Multiplicative>;

/// The additive monoid algebra `R[K]`, with keys added.
/// `AddMonoidAlgebra<u64, R>` is the polynomial ring `R[x]`.
pub type AddMonoidAlgebra<K, R> = ConvolutionAlgebra<K, R, Additive>;

impl<K, R, C> ConvolutionAlgebra<K, R, C> {
    /// Reinterprets a finite map as an algebra element.
    pub fn from_map(map: OrdFiniteMap<K, R>) -> Self {
        Self {
            map,
            _rule: PhantomData,
        }
    }

    pub fn as_map(&self) -> &OrdFiniteMap<K, R> {
        &self.map
    }

    pub fn into_map(self) -> OrdFiniteMap<K, R> {
        self.map
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (K, R)> {
        self.map.iter()
    }

    /// Smallest key in the support.  For a polynomial this is its order.
    pub fn min_key(&self) -> Option<&K> {
        self.map.as_slice().first().map(|(k, _)| k)
    }

    /// Largest key in the support.  For a polynomial this is its degree.
    pub fn max_key(&self) -> Option<&K> {
        self.map.as_slice().last().map(|(k, _)| k)
    }
}

impl<K, R, C> ConvolutionAlgebra<K, R, C>
where
    K: Ord + Clone,
    R: MonoidValue,
{
    /// `r` at `key`, zero elsewhere.
    pub fn single(key: K, r: R) -> Self {
        Self::from_map(OrdFiniteMap::singleton(key, r))
    }

    /// Pushes the element forward along `f`.
    ///
    /// When `f` is a monoid homomorphism from the `C` structure on `K` to
    /// the `C2` structure on `K2` the result is an algebra homomorphism.
    pub fn map_domain<K2, C2, F>(&self, f: F) -> ConvolutionAlgebra<K2, R, C2>
    where
        K2: Ord + Clone,
        F: FnMut(&K) -> K2,
    {
        ConvolutionAlgebra::from_map(self.map.map_keys(f))
    }
}

impl<K, R, C> ConvolutionAlgebra<K, R, C>
where
    K: Ord + Clone,
    R: SemiringValue,
    C: KeyMonoid<K>,
{
    /// The generator `of(k) = single(k, 1)`.
    pub fn of(key: K) -> Self {
        Self::single(key, R::one())
    }

    /// Left scalar action of the coefficient semiring.
    pub fn smul(&self, r: &R) -> Self {
        Self::from_map(self.map.smul(r))
    }

    /// Convolution product.  Key order `a1·a2` and coefficient order
    /// `f(a1) * g(a2)` are preserved, so neither the key monoid nor the
    /// coefficient semiring has to be commutative.
    pub fn mul_by_ref(&self, rhs: &Self) -> Self {
        Self::from_map(convolve(&self.map, &rhs.map, C::combine))
    }

    /// Coefficient of `(self * rhs)` at `x`, computed from the double sum
    /// without building the product.
    pub fn mul_apply(&self, rhs: &Self, x: &K) -> R {
        let mut acc = R::zero();
        for (a1, r1) in self.map.iter() {
            for (a2, r2) in rhs.map.iter() {
                if C::combine(a1, a2) == *x {
                    acc += r1.mul_by_ref(r2);
                }
            }
        }
        acc
    }

    /// `self` raised to the `exp`-th power; `pow(0)` is `one`.
    pub fn pow(&self, exp: usize) -> Self {
        num::pow(self.clone(), exp)
    }
}

impl<K, R, C> ConvolutionAlgebra<K, R, C>
where
    K: Ord + Clone,
    R: SemiringValue,
    C: KeyGroup<K>,
{
    /// Coefficient of `(self * rhs)` at `x` as a sum over the left support:
    /// `Σ_{a ∈ supp self} self(a) * rhs(a⁻¹·x)`.
    pub fn mul_apply_left(&self, rhs: &Self, x: &K) -> R {
        self.sum(|a, r| r.mul_by_ref(&rhs.evaluate(&C::combine(&C::inverse(a), x))))
    }

    /// Coefficient of `(self * rhs)` at `x` as a sum over the right support:
    /// `Σ_{b ∈ supp rhs} self(x·b⁻¹) * rhs(b)`.
    pub fn mul_apply_right(&self, rhs: &Self, x: &K) -> R {
        rhs.sum(|b, r| self.evaluate(&C::combine(x, &C::inverse(b))).mul_by_ref(r))
    }
}

impl<R> AddMonoidAlgebra<u64, R>
where
    R: SemiringValue,
{
    /// Evaluates a polynomial at `x` in any algebra over its coefficients.
    pub fn eval<A>(&self, x: &A) -> A
    where
        A: Algebra<R>,
    {
        lift::lift(|n: &u64| num::pow(x.clone(), *n as usize)).apply(self)
    }
}

/// Convolves two finite maps through `combine`.
///
/// Every pair of support entries contributes `(combine(a1, a2), r1 * r2)`;
/// the builder sums colliding keys and drops cancelled ones, so the
/// support of the result can be strictly smaller than the set of combined
/// keys.
pub fn convolve<K, R, F>(
    left: &OrdFiniteMap<K, R>,
    right: &OrdFiniteMap<K, R>,
    combine: F,
) -> OrdFiniteMap<K, R>
where
    K: Ord + Clone,
    R: SemiringValue,
    F: Fn(&K, &K) -> K,
{
    trace!("convolving {} x {} terms", left.len(), right.len());

    let mut builder = UnorderedLeafBuilder::with_capacity(left.len() * right.len());
    for (a1, r1) in left.iter() {
        for (a2, r2) in right.iter() {
            let product = r1.mul_by_ref(r2);
            if !product.is_zero() {
                builder.push_tuple((combine(a1, a2), product));
            }
        }
    }

    builder.done()
}

impl<K, R, C> FiniteMap for ConvolutionAlgebra<K, R, C>
where
    K: Ord + Clone,
    R: MonoidValue,
{
    type MapKey = K;
    type Value = R;

    fn pairs(&self) -> &[(K, R)] {
        self.map.as_slice()
    }
}

impl<K, R, C> Clone for ConvolutionAlgebra<K, R, C>
where
    K: Clone,
    R: Clone,
{
    fn clone(&self) -> Self {
        Self::from_map(self.map.clone())
    }
}

impl<K, R, C> Default for ConvolutionAlgebra<K, R, C> {
    fn default() -> Self {
        Self::from_map(OrdFiniteMap::default())
    }
}

impl<K, R, C> PartialEq for ConvolutionAlgebra<K, R, C>
where
    K: PartialEq,
    R: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K, R, C> Eq for ConvolutionAlgebra<K, R, C>
where
    K: Eq,
    R: Eq,
{
}

impl<K, R, C> Hash for ConvolutionAlgebra<K, R, C>
where
    K: Hash,
    R: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.map.hash(state);
    }
}

impl<K, R, C> Debug for ConvolutionAlgebra<K, R, C>
where
    K: Debug,
    R: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.map.iter().map(|(k, r)| (k, r)))
            .finish()
    }
}

impl<K, R, C> Display for ConvolutionAlgebra<K, R, C>
where
    K: Display,
    R: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.map, f)
    }
}

impl<K, R, C> Add for ConvolutionAlgebra<K, R, C>
where
    K: Ord + Clone,
    R: MonoidValue,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_map(self.map.merge(&rhs.map))
    }
}

impl<'a, K, R, C> Add<&'a ConvolutionAlgebra<K, R, C>> for &'a ConvolutionAlgebra<K, R, C>
where
    K: Ord + Clone,
    R: MonoidValue,
{
    type Output = ConvolutionAlgebra<K, R, C>;

    fn add(self, rhs: Self) -> Self::Output {
        ConvolutionAlgebra::from_map(self.map.merge(&rhs.map))
    }
}

impl<K, R, C> AddAssign for ConvolutionAlgebra<K, R, C>
where
    K: Ord + Clone,
    R: MonoidValue,
{
    fn add_assign(&mut self, rhs: Self) {
        self.map = self.map.merge(&rhs.map);
    }
}

impl<'a, K, R, C> AddAssign<&'a ConvolutionAlgebra<K, R, C>> for ConvolutionAlgebra<K, R, C>
where
    K: Ord + Clone,
    R: MonoidValue,
{
    fn add_assign(&mut self, rhs: &'a Self) {
        self.map = self.map.merge(&rhs.map);
    }
}

impl<K, R, C> Zero for ConvolutionAlgebra<K, R, C>
where
    K: Ord + Clone,
    R: MonoidValue,
{
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K, R, C> Neg for ConvolutionAlgebra<K, R, C>
where
    R: Neg<Output = R>,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_map(-self.map)
    }
}

impl<'a, K, R, C> Neg for &'a ConvolutionAlgebra<K, R, C>
where
    K: Clone,
    R: GroupValue,
{
    type Output = ConvolutionAlgebra<K, R, C>;

    fn neg(self) -> Self::Output {
        ConvolutionAlgebra::from_map(-&self.map)
    }
}

impl<K, R, C> Sub for ConvolutionAlgebra<K, R, C>
where
    K: Ord + Clone,
    R: GroupValue,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_map(self.map - rhs.map)
    }
}

impl<'a, K, R, C> Sub<&'a ConvolutionAlgebra<K, R, C>> for &'a ConvolutionAlgebra<K, R, C>
where
    K: Ord + Clone,
    R: GroupValue,
{
    type Output = ConvolutionAlgebra<K, R, C>;

    fn sub(self, rhs: Self) -> Self::Output {
        ConvolutionAlgebra::from_map(&self.map - &rhs.map)
    }
}

impl<K, R, C> Mul for ConvolutionAlgebra<K, R, C>
where
    K: Ord + Clone,
    R: SemiringValue,
    C: KeyMonoid<K>,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.mul_by_ref(&rhs)
    }
}

impl<'a, K, R, C> Mul<&'a ConvolutionAlgebra<K, R, C>> for &'a ConvolutionAlgebra<K, R, C>
where
    K: Ord + Clone,
    R: SemiringValue,
    C: KeyMonoid<K>,
{
    type Output = ConvolutionAlgebra<K, R, C>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_by_ref(rhs)
    }
}

impl<K, R, C> One for ConvolutionAlgebra<K, R, C>
where
    K: Ord + Clone,
    R: SemiringValue,
    C: KeyMonoid<K>,
{
    /// `1` at the identity key.
    fn one() -> Self {
        Self::single(C::identity(), R::one())
    }
}

impl<K, R, C> Algebra<R> for ConvolutionAlgebra<K, R, C>
where
    K: Ord + Clone + 'static,
    R: SemiringValue,
    C: KeyMonoid<K> + 'static,
{
    fn algebra_map(r: &R) -> Self {
        Self::single(C::identity(), r.clone())
    }

    fn smul(r: &R, a: &Self) -> Self {
        a.smul(r)
    }
}

/// The product is commutative when both the key combination and the
/// coefficients are.
///
/// Words do not commute, so neither does their monoid algebra, nor a
/// polynomial ring over it:
///
/// ```compile_fail
/// use convalg::algebra::{Commutative, FreeMonoid, MonoidAlgebra};
///
/// fn commutes<T: Commutative>() {}
/// commutes::<MonoidAlgebra<FreeMonoid<char>, i64>>();
/// ```
///
/// ```compile_fail
/// use convalg::algebra::{AddMonoidAlgebra, Commutative, FreeMonoid, MonoidAlgebra};
///
/// fn commutes<T: Commutative>() {}
/// commutes::<AddMonoidAlgebra<u64, MonoidAlgebra<FreeMonoid<char>, i64>>>();
/// ```
impl<K, R, C> Commutative for ConvolutionAlgebra<K, R, C>
where
    C: KeyCommutative<K>,
    R: Commutative,
{
}

#[cfg(feature = "with-serde")]
mod serde_impls {
    use super::ConvolutionAlgebra;
    use crate::algebra::{MonoidValue, OrdFiniteMap};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<K, R, C> Serialize for ConvolutionAlgebra<K, R, C>
    where
        K: Serialize,
        R: Serialize,
    {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.as_map().serialize(serializer)
        }
    }

    impl<'de, K, R, C> Deserialize<'de> for ConvolutionAlgebra<K, R, C>
    where
        K: Deserialize<'de> + Ord,
        R: Deserialize<'de> + MonoidValue,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            OrdFiniteMap::deserialize(deserializer).map(Self::from_map)
        }
    }
}
