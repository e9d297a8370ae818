//! Number theory for the letterwise RSA keys.

use crate::error::{Error, Result};

/// Extended Euclid. Returns `(g, x, y)` with `a * x + b * y == g`.
pub fn egcd(a: i64, b: i64) -> (i64, i64, i64) {
    if b == 0 {
        return (a, 1, 0);
    }

    let (g, x, y) = egcd(b, a % b);
    (g, y, x - (a / b) * y)
}

pub fn gcd(a: i64, b: i64) -> i64 {
    egcd(a, b).0
}

/// Inverse of `a` modulo `m`, or `NoModularInverse` when `gcd(a, m) != 1`.
pub fn mod_inv(a: i64, m: i64) -> Result<i64> {
    let (g, x, _) = egcd(a, m);
    if g != 1 {
        return Err(Error::NoModularInverse { value: a, modulus: m });
    }

    Ok(((x % m) + m) % m)
}

/// `base ^ exp mod m` by square-and-multiply.
///
/// Products are taken in 128 bits so `(base mod m)^2` never overflows.
pub fn mod_pow(base: u64, mut exp: u64, m: u64) -> u64 {
    if m == 1 {
        return 0;
    }

    let m = m as u128;
    let mut base = base as u128 % m;
    let mut result = 1u128;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }

    result as u64
}

pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }

    (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_egcd() {
        // (a, b, gcd)
        let cases = vec![(2, 4, 2), (1, 5, 1), (3, 6, 3), (4, 12, 4), (6, 14, 2)];

        for (a, b, expected) in cases {
            let (g, x, y) = egcd(a, b);
            assert_eq!(g, expected);
            assert_eq!(a * x + b * y, g);
        }
    }

    #[test]
    fn test_mod_inv() {
        // (a, m, inverse)
        let cases = vec![(10, 9, 1), (50, 13, 6), (11, 5, 1), (9, 5, 4)];

        for (a, m, expected) in cases {
            let inv = mod_inv(a, m).unwrap();
            assert_eq!(inv, expected);
            assert_eq!((a * inv) % m, 1);
        }
    }

    #[test]
    fn test_mod_inv_not_coprime() {
        match mod_inv(6, 14) {
            Err(Error::NoModularInverse { value, modulus }) => {
                assert_eq!(value, 6);
                assert_eq!(modulus, 14);
            }
            other => panic!("expected NoModularInverse, got {:?}", other),
        }
    }

    #[test]
    fn test_mod_pow() {
        // (base, exp, mod, expected)
        let cases = vec![
            (16, 4, 8, 0),
            (16, 4, 5, 1),
            (11, 2, 7, 2),
            (50, 19, 14, 8),
            (50, 5, 5, 0),
        ];

        for (b, e, m, expected) in cases {
            assert_eq!(mod_pow(b, e, m), expected);
        }
    }

    #[test]
    fn test_mod_pow_matches_naive() {
        for m in 2..40u64 {
            for b in 0..30u64 {
                let mut naive = 1 % m;
                for e in 0..12u64 {
                    assert_eq!(mod_pow(b, e, m), naive, "{}^{} mod {}", b, e, m);
                    naive = naive * b % m;
                }
            }
        }
    }

    #[test]
    fn test_mod_pow_large_modulus() {
        let m = u64::max_value() - 58;
        assert_eq!(mod_pow(m - 1, 2, m), 1);
    }

    #[test]
    fn test_is_prime() {
        let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(127));
        assert!(!is_prime(121));
    }
}
