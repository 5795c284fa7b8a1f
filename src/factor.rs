//! Factorizer Module
//!
//! Deterministic trial division over arbitrary-precision integers.

use num_bigint::BigUint;
use num_traits::{One, Zero};

// == Factorize ==
/// Returns the unique prime factors of `n` in ascending order.
///
/// Each factor found is divided out completely before the next divisor is
/// tried, so the loop bound `d * d <= temp` shrinks as factors are removed.
/// Inputs below 2 have no prime factors and yield an empty vector.
pub fn factorize(n: &BigUint) -> Vec<BigUint> {
    let mut factors = Vec::new();
    let two = BigUint::from(2u32);

    if *n < two {
        return factors;
    }

    let mut temp = n.clone();

    if (&temp % &two).is_zero() {
        factors.push(two.clone());
        while (&temp % &two).is_zero() {
            temp /= &two;
        }
    }

    let mut divisor = BigUint::from(3u32);
    while &divisor * &divisor <= temp {
        if (&temp % &divisor).is_zero() {
            factors.push(divisor.clone());
            while (&temp % &divisor).is_zero() {
                temp /= &divisor;
            }
        }
        divisor += &two;
    }

    if temp > BigUint::one() {
        factors.push(temp);
    }

    // Divisors are visited in increasing order and the leftover is larger than
    // all of them, so the vector is already strictly ascending.
    factors
}

// == Reconstructs ==
/// Checks that dividing `n` by every factor until it no longer divides leaves 1.
pub fn reconstructs(n: &BigUint, factors: &[BigUint]) -> bool {
    let mut rest = n.clone();
    for factor in factors {
        if factor <= &BigUint::one() || !(&rest % factor).is_zero() {
            return false;
        }
        while (&rest % factor).is_zero() {
            rest /= factor;
        }
    }
    rest.is_one()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    fn factors_of(n: u64) -> Vec<u64> {
        factorize(&big(n))
            .iter()
            .map(|f| f.to_string().parse().unwrap())
            .collect()
    }

    #[test]
    fn test_factorize_two() {
        assert_eq!(factors_of(2), vec![2]);
    }

    #[test]
    fn test_factorize_power_of_two() {
        assert_eq!(factors_of(4), vec![2]);
        assert_eq!(factors_of(1024), vec![2]);
    }

    #[test]
    fn test_factorize_composite() {
        assert_eq!(factors_of(12), vec![2, 3]);
        assert_eq!(factors_of(100), vec![2, 5]);
        assert_eq!(factors_of(360), vec![2, 3, 5]);
    }

    #[test]
    fn test_factorize_prime() {
        assert_eq!(factors_of(17), vec![17]);
        assert_eq!(factors_of(7919), vec![7919]);
    }

    #[test]
    fn test_factorize_square_of_prime() {
        assert_eq!(factors_of(9), vec![3]);
        assert_eq!(factors_of(49), vec![7]);
    }

    #[test]
    fn test_factorize_twice_a_prime() {
        assert_eq!(factors_of(2 * 104_729), vec![2, 104_729]);
    }

    #[test]
    fn test_factorize_below_two_is_empty() {
        assert!(factorize(&big(0)).is_empty());
        assert!(factorize(&big(1)).is_empty());
    }

    #[test]
    fn test_factorize_beyond_u64() {
        // 2^64 * 3 does not fit in a u64
        let n: BigUint = (BigUint::one() << 64u32) * 3u32;
        assert_eq!(factorize(&n), vec![big(2), big(3)]);
    }

    #[test]
    fn test_factorize_large_prime_remainder() {
        // The prime cofactor survives the loop and is recorded last
        let prime = big(1_000_000_007);
        let n = &prime * 4u32;
        assert_eq!(factorize(&n), vec![big(2), prime]);
    }

    #[test]
    fn test_reconstructs() {
        assert!(reconstructs(&big(360), &[big(2), big(3), big(5)]));
        assert!(!reconstructs(&big(360), &[big(2), big(3)]));
        assert!(!reconstructs(&big(360), &[big(2), big(3), big(7)]));
        assert!(!reconstructs(&big(5), &[big(1), big(5)]));
    }
}
