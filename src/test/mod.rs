#![cfg(test)]


use crate::{
    algebra::{
        lift::{ext_on_support, lift, AlgebraHom},
        AddMonoidAlgebra, FiniteMap, FreeMonoid, MonoidAlgebra, ZMod,
    },
    arithmetic_function::{divisors_antidiagonal, zeta},
    convolution, ArithmeticFunction,
};
use num::rational::Ratio;
use std::collections::BTreeSet;

type Poly = AddMonoidAlgebra<u64, i64>;
type Laurent = AddMonoidAlgebra<i64, i64>;

// 3 + 2x times x is 3x + 2x².
#[test]
fn polynomial_times_x() {
    let f = Poly::single(1, 2) + Poly::single(0, 3);
    let g = Poly::single(1, 1);
    let product = &f * &g;

    assert_eq!(product.evaluate(&1), 3);
    assert_eq!(product.evaluate(&2), 2);
    for key in [0, 3, 4, 100] {
        assert_eq!(product.evaluate(&key), 0);
    }
    assert_eq!(product.support().copied().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn zeta_squared_at_six() {
    let zeta: ArithmeticFunction<u64> = zeta();
    let product = &zeta * &zeta;

    assert_eq!(
        divisors_antidiagonal(6),
        vec![(1, 6), (2, 3), (3, 2), (6, 1)]
    );
    assert_eq!(product.evaluate(6), 4);
    assert_eq!(product.evaluate(0), 0);
}

#[test]
fn cyclic_group_singles() {
    let coefficients = [Ratio::new(2i64, 3), Ratio::new(-5, 7), Ratio::from_integer(4)];

    for a in 0..3 {
        for c in 0..3 {
            for b in &coefficients {
                for d in &coefficients {
                    let (a, c) = (ZMod::<3>::new(a), ZMod::<3>::new(c));
                    let left = AddMonoidAlgebra::single(a, *b);
                    let right = AddMonoidAlgebra::single(c, *d);
                    assert_eq!(&left * &right, AddMonoidAlgebra::single(a + c, b * d));
                }
            }
        }
    }
}

// (x + x⁻¹)(x - x⁻¹) = x² - x⁻²: the two contributions at x⁰ cancel.
#[test]
fn cancellation_shrinks_support() {
    let f = Laurent::single(1, 1) + Laurent::single(-1, 1);
    let g = Laurent::single(1, 1) + Laurent::single(-1, -1);

    let naive: BTreeSet<i64> = f
        .support()
        .flat_map(|a| g.support().map(move |b| a + b))
        .collect();
    assert_eq!(naive, BTreeSet::from([-2, 0, 2]));

    let product = &f * &g;
    let support: BTreeSet<i64> = product.support().copied().collect();
    assert_eq!(support, BTreeSet::from([-2, 2]));
    assert!(support.len() < naive.len());
    assert_eq!(product, convolution! { 2 => 1, -2 => -1 });
}

#[test]
fn lifts_from_one_homomorphism_agree() {
    // Word length is a monoid homomorphism to (ℕ, +), so 3^len is one to
    // the multiplicative monoid of ℤ.
    let generators = |w: &FreeMonoid<char>| 3i64.pow(w.len() as u32);
    let first = lift(generators);
    let second = lift(generators);

    let words = ["", "a", "b", "ab", "ba", "aab"];
    let elements: Vec<MonoidAlgebra<FreeMonoid<char>, i64>> = words
        .iter()
        .enumerate()
        .map(|(i, w)| {
            MonoidAlgebra::single(FreeMonoid::word(w), i as i64 - 2)
                + MonoidAlgebra::of(FreeMonoid::word("b"))
        })
        .collect();

    for f in &elements {
        for g in &elements {
            let element = &(f * g) + f;
            assert_eq!(first.apply(&element), second.apply(&element));
            assert!(ext_on_support(&first, &second, &element));
        }
    }
}
