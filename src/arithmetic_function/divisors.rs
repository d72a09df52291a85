//! Divisors and prime factorizations of natural numbers.

use num::integer::{gcd, Roots};

/// Positive divisors of `n` in increasing order.  Empty for `0`, whose
/// divisors do not form a finite set.
pub fn divisors(n: u64) -> Vec<u64> {
    if n == 0 {
        return Vec::new();
    }

    let mut small = Vec::new();
    let mut large = Vec::new();
    for d in 1..=n.sqrt() {
        if n % d == 0 {
            small.push(d);
            if d != n / d {
                large.push(n / d);
            }
        }
    }

    small.extend(large.into_iter().rev());
    small
}

/// Ordered pairs `(d, e)` with `d * e == n`, by increasing `d`.  Empty for
/// `0`.
pub fn divisors_antidiagonal(n: u64) -> Vec<(u64, u64)> {
    divisors(n).into_iter().map(|d| (d, n / d)).collect()
}

/// Prime factorization of `n` as `(prime, exponent)` pairs with increasing
/// primes.  Empty for `0` and `1`.
pub fn factorize(mut n: u64) -> Vec<(u64, u32)> {
    let mut factors = Vec::new();
    if n == 0 {
        return factors;
    }

    let mut p = 2;
    while p <= n / p {
        if n % p == 0 {
            let mut exponent = 0;
            while n % p == 0 {
                n /= p;
                exponent += 1;
            }
            factors.push((p, exponent));
        }
        p += if p == 2 { 1 } else { 2 };
    }
    if n > 1 {
        factors.push((n, 1));
    }

    factors
}

/// True when `m` and `n` have no common factor besides 1.
pub fn coprime(m: u64, n: u64) -> bool {
    gcd(m, n) == 1
}

#[cfg(test)]
mod tests {
    use super::{coprime, divisors, divisors_antidiagonal, factorize};
    use rstest::rstest;

    #[rstest]
    #[case(0, &[])]
    #[case(1, &[1])]
    #[case(6, &[1, 2, 3, 6])]
    #[case(16, &[1, 2, 4, 8, 16])]
    #[case(17, &[1, 17])]
    #[case(36, &[1, 2, 3, 4, 6, 9, 12, 18, 36])]
    fn divisors_of(#[case] n: u64, #[case] expected: &[u64]) {
        assert_eq!(divisors(n), expected);
    }

    #[test]
    fn antidiagonal_of_six() {
        assert_eq!(
            divisors_antidiagonal(6),
            vec![(1, 6), (2, 3), (3, 2), (6, 1)]
        );
        assert!(divisors_antidiagonal(0).is_empty());
    }

    #[rstest]
    #[case(0, &[])]
    #[case(1, &[])]
    #[case(2, &[(2, 1)])]
    #[case(360, &[(2, 3), (3, 2), (5, 1)])]
    #[case(97, &[(97, 1)])]
    #[case(1001, &[(7, 1), (11, 1), (13, 1)])]
    fn factorization_of(#[case] n: u64, #[case] expected: &[(u64, u32)]) {
        assert_eq!(factorize(n), expected);
    }

    #[test]
    fn factorization_multiplies_back() {
        for n in 1..500u64 {
            let product: u64 = factorize(n).iter().map(|(p, e)| p.pow(*e)).product();
            assert_eq!(product, n);
        }
    }

    #[test]
    fn coprimality() {
        assert!(coprime(8, 9));
        assert!(!coprime(6, 9));
        assert!(coprime(1, 0));
    }
}
