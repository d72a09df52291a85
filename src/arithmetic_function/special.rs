//! Classical arithmetic functions.

use super::{divisors, factorize, ArithmeticFunction};
use crate::algebra::SemiringValue;

/// `ζ`: `1` at every positive integer.
pub fn zeta<R>() -> ArithmeticFunction<R>
where
    R: SemiringValue,
{
    ArithmeticFunction::from_fn(|_| R::one())
}

/// The identity function `n ↦ n`.
pub fn id() -> ArithmeticFunction<u64> {
    ArithmeticFunction::from_fn(|n| n)
}

/// `n ↦ n^k`, saturating at `u64::MAX`.
pub fn pow(k: u32) -> ArithmeticFunction<u64> {
    ArithmeticFunction::from_fn(move |n| n.saturating_pow(k))
}

/// `σ_k`: `n ↦ Σ_{d | n} d^k`, saturating at `u64::MAX`.  `σ_0` counts
/// divisors and `σ_1` sums them.
pub fn sigma(k: u32) -> ArithmeticFunction<u64> {
    ArithmeticFunction::from_fn(move |n| {
        divisors(n)
            .into_iter()
            .map(|d| d.saturating_pow(k))
            .fold(0, u64::saturating_add)
    })
}

/// `Ω`: number of prime factors counted with multiplicity.
pub fn card_factors() -> ArithmeticFunction<u64> {
    ArithmeticFunction::from_fn(|n| factorize(n).iter().map(|(_, e)| u64::from(*e)).sum())
}

/// `ω`: number of distinct prime factors.
pub fn card_distinct_factors() -> ArithmeticFunction<u64> {
    ArithmeticFunction::from_fn(|n| factorize(n).len() as u64)
}

/// `μ`: `(-1)^ω(n)` for square-free `n`, zero otherwise.
pub fn moebius() -> ArithmeticFunction<i64> {
    ArithmeticFunction::from_fn(|n| {
        let factors = factorize(n);
        if factors.iter().any(|(_, e)| *e > 1) {
            0
        } else if factors.len() % 2 == 0 {
            1
        } else {
            -1
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{card_distinct_factors, card_factors, id, moebius, pow, sigma, zeta};
    use crate::arithmetic_function::ArithmeticFunction;

    #[test]
    fn values() {
        assert_eq!(
            moebius().tabulate(10),
            vec![0, 1, -1, -1, 0, -1, 1, -1, 0, 0, 1]
        );
        assert_eq!(sigma(0).tabulate(6), vec![0, 1, 2, 2, 3, 2, 4]);
        assert_eq!(sigma(1).evaluate(12), 28);
        assert_eq!(sigma(2).evaluate(4), 1 + 4 + 16);
        assert_eq!(card_factors().evaluate(360), 6);
        assert_eq!(card_distinct_factors().evaluate(360), 3);
        assert_eq!(card_factors().evaluate(1), 0);
        assert_eq!(pow(3).evaluate(0), 0);
        assert_eq!(pow(0).evaluate(0), 0);
        assert_eq!(pow(3).evaluate(4), 64);
    }

    #[test]
    fn large_values_saturate() {
        assert_eq!(pow(64).evaluate(2), u64::MAX);
        assert_eq!(pow(63).evaluate(2), 1 << 63);
        assert_eq!(sigma(64).evaluate(2), u64::MAX);
        // 1 + 2^63 fits; 4^63 already saturates.
        assert_eq!(sigma(63).evaluate(2), (1 << 63) + 1);
        assert_eq!(sigma(63).evaluate(4), u64::MAX);
    }

    #[test]
    fn sigma_is_zeta_times_pow() {
        for k in 0..3 {
            assert!(sigma(k).agrees_up_to(&(zeta() * pow(k)), 120));
        }
        assert!(sigma(1).agrees_up_to(&(zeta() * id()), 120));
    }

    #[test]
    fn pow_zero_is_zeta() {
        let zeta: ArithmeticFunction<u64> = zeta();
        assert!(pow(0).agrees_up_to(&zeta, 50));
    }

    #[test]
    fn additive_functions_are_not_multiplicative() {
        assert!(!card_factors().is_multiplicative_up_to(10));
        assert!(card_distinct_factors()
            .map_values(|w| 2u64.pow(w as u32))
            .is_multiplicative_up_to(300));
    }
}
