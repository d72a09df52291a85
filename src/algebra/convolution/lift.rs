//! The universal property of convolution algebras.
//!
//! A monoid homomorphism `F: K -> A` into the multiplicative monoid of an
//! `R`-algebra `A` extends uniquely to an algebra homomorphism
//! `lift(F): R[K] -> A` with `lift(F)(of(k)) = F(k)`:
//!
//! ```text
//! lift(F)(f) = Σ_{k ∈ supp f} f(k) • F(k)
//! ```
//!
//! Going back, an algebra homomorphism restricts to the generators
//! `of(k)`; the two directions are inverse to each other.  In particular
//! two algebra homomorphisms agree on `f` as soon as they agree on the
//! generators in the support of `f`, see [`ext_on_support`].

use super::{ConvolutionAlgebra, KeyMonoid};
use crate::algebra::{Algebra, FiniteMap, SemiringValue};
use log::debug;
use std::marker::PhantomData;

/// A function `K -> A` that the caller asserts is a monoid homomorphism:
/// it maps the identity key to `1` and combined keys to products.
pub struct MonoidHom<K, A, F> {
    map: F,
    _types: PhantomData<fn(&K) -> A>,
}

impl<K, A, F> MonoidHom<K, A, F>
where
    F: Fn(&K) -> A,
{
    pub fn new(map: F) -> Self {
        Self {
            map,
            _types: PhantomData,
        }
    }

    pub fn apply(&self, key: &K) -> A {
        (self.map)(key)
    }
}

impl<K, A, F> Clone for MonoidHom<K, A, F>
where
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
            _types: PhantomData,
        }
    }
}

/// An algebra homomorphism out of a convolution algebra.
pub trait AlgebraHom<K, R, C, A> {
    fn apply(&self, element: &ConvolutionAlgebra<K, R, C>) -> A;
}

/// Algebra homomorphism determined by its values on generators.
pub struct Lift<K, R, C, A, F> {
    generators: MonoidHom<K, A, F>,
    _types: PhantomData<fn(R, C)>,
}

impl<K, R, C, A, F> Lift<K, R, C, A, F>
where
    F: Fn(&K) -> A,
{
    pub fn new(generators: MonoidHom<K, A, F>) -> Self {
        debug!("lifting monoid homomorphism to an algebra homomorphism");
        Self {
            generators,
            _types: PhantomData,
        }
    }

    /// The monoid homomorphism this lift was built from.
    pub fn generators(&self) -> &MonoidHom<K, A, F> {
        &self.generators
    }
}

impl<K, R, C, A, F> AlgebraHom<K, R, C, A> for Lift<K, R, C, A, F>
where
    K: Ord + Clone,
    R: SemiringValue,
    A: Algebra<R>,
    F: Fn(&K) -> A,
{
    fn apply(&self, element: &ConvolutionAlgebra<K, R, C>) -> A {
        element.sum(|k, r| A::smul(r, &self.generators.apply(k)))
    }
}

/// Lifts `generators` to the algebra homomorphism `Σ f(k) • generators(k)`.
pub fn lift<K, R, C, A, F>(generators: F) -> Lift<K, R, C, A, F>
where
    F: Fn(&K) -> A,
{
    Lift::new(MonoidHom::new(generators))
}

/// Wraps an arbitrary function on the algebra as a candidate homomorphism.
pub struct FnHom<F>(pub F);

impl<K, R, C, A, F> AlgebraHom<K, R, C, A> for FnHom<F>
where
    F: Fn(&ConvolutionAlgebra<K, R, C>) -> A,
{
    fn apply(&self, element: &ConvolutionAlgebra<K, R, C>) -> A {
        (self.0)(element)
    }
}

/// Restricts an algebra homomorphism to the generators: `k ↦ h(of(k))`.
pub fn restrict<'a, K, R, C, A, H>(hom: &'a H) -> MonoidHom<K, A, impl Fn(&K) -> A + 'a>
where
    K: Ord + Clone + 'a,
    R: SemiringValue,
    C: KeyMonoid<K> + 'a,
    A: 'a,
    H: AlgebraHom<K, R, C, A>,
{
    MonoidHom::new(move |key: &K| hom.apply(&ConvolutionAlgebra::<K, R, C>::of(key.clone())))
}

/// Decides `first(element) == second(element)` for two algebra
/// homomorphisms by comparing them on the generators `of(k)` for `k` in
/// the support of `element` only.
pub fn ext_on_support<K, R, C, A, H1, H2>(
    first: &H1,
    second: &H2,
    element: &ConvolutionAlgebra<K, R, C>,
) -> bool
where
    K: Ord + Clone,
    R: SemiringValue,
    C: KeyMonoid<K>,
    A: PartialEq,
    H1: AlgebraHom<K, R, C, A>,
    H2: AlgebraHom<K, R, C, A>,
{
    ext_on_generators(first, second, element.support().cloned())
}

/// Compares two algebra homomorphisms on the generators `of(k)` for every
/// `k` in `keys`.  When `keys` covers the key monoid, or every support of
/// interest, the homomorphisms are equal there.
pub fn ext_on_generators<K, R, C, A, H1, H2, I>(first: &H1, second: &H2, keys: I) -> bool
where
    K: Ord + Clone,
    R: SemiringValue,
    C: KeyMonoid<K>,
    A: PartialEq,
    H1: AlgebraHom<K, R, C, A>,
    H2: AlgebraHom<K, R, C, A>,
    I: IntoIterator<Item = K>,
{
    keys.into_iter().all(|key| {
        let generator = ConvolutionAlgebra::<K, R, C>::of(key);
        first.apply(&generator) == second.apply(&generator)
    })
}

#[cfg(test)]
mod tests {
    use super::{ext_on_generators, ext_on_support, lift, restrict, AlgebraHom, FnHom};
    use crate::{
        algebra::{AddMonoidAlgebra, FiniteMap, FreeMonoid, MonoidAlgebra},
        convolution,
    };
    use num::{rational::Ratio, One, Zero};

    type Poly = AddMonoidAlgebra<u64, i64>;

    #[test]
    fn lift_of_generator_is_generator_image() {
        let hom = lift(|n: &u64| Ratio::new(1i64, 2).pow(*n as i32));
        for n in 0..6u64 {
            let generator: Poly = Poly::of(n);
            assert_eq!(hom.apply(&generator), Ratio::new(1, 2i64.pow(n as u32)));
        }
    }

    #[test]
    fn lift_is_a_homomorphism() {
        let hom = lift(|n: &u64| 3i64.pow(*n as u32));
        let f: Poly = convolution! { 0 => 1, 2 => -2 };
        let g: Poly = convolution! { 1 => 5, 3 => 1 };

        assert_eq!(hom.apply(&(&f + &g)), hom.apply(&f) + hom.apply(&g));
        assert_eq!(hom.apply(&(&f * &g)), hom.apply(&f) * hom.apply(&g));
        assert_eq!(hom.apply(&Poly::one()), 1);
        assert_eq!(hom.apply(&Poly::zero()), 0);
        assert_eq!(hom.apply(&f.smul(&7)), 7 * hom.apply(&f));
    }

    #[test]
    fn restrict_inverts_lift() {
        let square = |n: &u64| 2i64.pow(*n as u32);
        let hom = lift::<u64, i64, _, _, _>(square);
        let restricted = restrict::<u64, i64, crate::algebra::Additive, _, _>(&hom);
        for n in 0..8 {
            assert_eq!(restricted.apply(&n), square(&n));
        }
    }

    #[test]
    fn lifts_of_one_generator_map_agree_everywhere() {
        // Words to powers of two by length: a monoid homomorphism.
        let first = lift(|w: &FreeMonoid<char>| 2i64.pow(w.len() as u32));
        let second = lift(|w: &FreeMonoid<char>| 1i64 << w.len());

        let element: MonoidAlgebra<FreeMonoid<char>, i64> = convolution! {
            FreeMonoid::word("ab") => 2,
            FreeMonoid::word("") => -1,
            FreeMonoid::word("ba") => 4,
        };
        assert!(ext_on_support(&first, &second, &element));
        assert_eq!(first.apply(&element), second.apply(&element));
        assert_eq!(first.apply(&element), 2 * 4 - 1 + 4 * 4);
    }

    #[test]
    fn ext_detects_disagreement_on_generators() {
        let evaluation = lift(|n: &u64| 2i64.pow(*n as u32));
        let constant_term = FnHom(|f: &Poly| f.evaluate(&0));

        let constant: Poly = convolution! { 0 => 9 };
        let linear: Poly = convolution! { 0 => 9, 1 => 1 };

        assert!(ext_on_support(&evaluation, &constant_term, &constant));
        assert!(!ext_on_support(&evaluation, &constant_term, &linear));
        assert!(!ext_on_generators(&evaluation, &constant_term, 0..3));
    }

    #[test]
    fn lift_into_a_convolution_algebra() {
        // x ↦ x² as a lift into the polynomial ring itself.
        let substitute = lift(|n: &u64| Poly::of(2 * n));
        let f: Poly = convolution! { 0 => 1, 1 => 3 };
        assert_eq!(substitute.apply(&f), convolution! { 0 => 1, 2 => 3 });
    }
}
