//! An insecure letter-wise RSA.
//!
//! Every character is encrypted on its own with tiny primes, which makes this a
//! plain substitution cipher over numbers. It exists to be cracked.

use crate::cipher::SubstitutionCipher;
use crate::encoding::{Ciphertext, Symbols};
use crate::error::{Error, Result};
use crate::modular::{gcd, is_prime, mod_inv, mod_pow};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use std::convert::TryFrom;
use std::fmt;

/// Key pool. The smallest modulus, 29 * 31 = 899, still covers Latin-1.
pub const PRIMES: [u64; 22] = [
    29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97, 101, 103, 107, 109, 113, 127,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey {
    pub e: u64,
    pub n: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey {
    pub d: u64,
    pub n: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterwiseRsa {
    p: u64,
    q: u64,
    public: PublicKey,
    private: PrivateKey,
}

impl LetterwiseRsa {
    pub const NAME: &'static str = "letterwise-rsa";

    /// The pair is unordered: `from_primes(q, p)` is the same key.
    pub fn from_primes(p: u64, q: u64) -> Result<Self> {
        let (p, q) = (p.min(q), p.max(q));
        if p == q {
            return Err(Error::InvalidKey(format!("p and q must differ, both are {}", p)));
        }
        if let Some(&x) = [p, q].iter().find(|&&x| !is_prime(x)) {
            return Err(Error::InvalidKey(format!("{} is not prime", x)));
        }

        // ciphertext symbols are u32 codes
        let n = p
            .checked_mul(q)
            .filter(|&n| n <= u64::from(u32::max_value()))
            .ok_or_else(|| {
                Error::InvalidKey(format!("modulus {} * {} does not fit a 32-bit symbol", p, q))
            })?;

        let (public, private) = generate_keys(p, q, n)?;
        Ok(LetterwiseRsa {
            p,
            q,
            public,
            private,
        })
    }

    /// A cipher on two distinct primes drawn from `PRIMES`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self> {
        let picked: Vec<u64> = PRIMES.choose_multiple(rng, 2).cloned().collect();
        LetterwiseRsa::from_primes(picked[0], picked[1])
    }

    pub fn primes(&self) -> (u64, u64) {
        (self.p, self.q)
    }

    pub fn public_key(&self) -> PublicKey {
        self.public
    }

    pub fn private_key(&self) -> PrivateKey {
        self.private
    }
}

fn generate_keys(p: u64, q: u64, n: u64) -> Result<(PublicKey, PrivateKey)> {
    let phi = (p - 1) * (q - 1);

    // smallest exponent coprime with phi
    let e = (2..phi)
        .find(|&e| gcd(e as i64, phi as i64) == 1)
        .ok_or_else(|| Error::InvalidKey(format!("no public exponent for p={}, q={}", p, q)))?;
    let d = mod_inv(e as i64, phi as i64)? as u64;

    Ok((PublicKey { e, n }, PrivateKey { d, n }))
}

fn to_symbol(value: u64) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| Error::InvalidKey(format!("{} does not fit a 32-bit symbol", value)))
}

impl SubstitutionCipher for LetterwiseRsa {
    /// The ciphertext is a serialized number sequence, e.g. `[1,20,300]`.
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let PublicKey { e, n } = self.public;

        let codes = Symbols::from_string(plaintext)
            .iter()
            .map(|c| {
                if u64::from(c) >= n {
                    return Err(Error::UnsupportedSymbol { symbol: c, modulus: n });
                }
                to_symbol(mod_pow(u64::from(c), e, n))
            })
            .collect::<Result<Vec<u32>>>()?;

        Ok(Symbols::from_codes(codes).serialize())
    }

    fn decrypt_symbol(&self, symbol: u32) -> Result<u32> {
        let PrivateKey { d, n } = self.private;
        if u64::from(symbol) >= n {
            return Err(Error::SymbolOutOfRange { symbol, modulus: n });
        }
        to_symbol(mod_pow(u64::from(symbol), d, n))
    }

    fn adapt_ciphertext(ciphertext: &Ciphertext) -> Result<Symbols> {
        match ciphertext {
            Ciphertext::Text(s) => Symbols::parse_sequence(s),
            Ciphertext::Number(n) => Symbols::from_number(*n),
            Ciphertext::Sequence(codes) => Ok(Symbols::from_codes(codes.clone())),
        }
    }

    fn all() -> Vec<Self> {
        PRIMES
            .iter()
            .tuple_combinations::<(_, _)>()
            .filter_map(|(&p, &q)| LetterwiseRsa::from_primes(p, q).ok())
            .collect()
    }
}

impl fmt::Display for LetterwiseRsa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(p={}, q={})", Self::NAME, self.p, self.q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const PANGRAM: &str = "The quick brown fox jumps over the lazy dog.";

    #[test]
    fn test_generate_keys() {
        let cipher = LetterwiseRsa::from_primes(29, 31).unwrap();
        let PublicKey { e, n } = cipher.public_key();
        let PrivateKey { d, .. } = cipher.private_key();

        // phi = 840 = 2^3 * 3 * 5 * 7, first coprime is 11
        assert_eq!(n, 899);
        assert_eq!(e, 11);
        assert_eq!((e * d) % 840, 1);
    }

    #[test]
    fn test_round_trip_all_keys() {
        for cipher in LetterwiseRsa::all() {
            let ciphertext = cipher.encrypt(PANGRAM).unwrap();
            assert_eq!(cipher.decrypt(&ciphertext.into()).unwrap(), PANGRAM, "{}", cipher);
        }
    }

    #[test]
    fn test_symbol_round_trip() {
        let cipher = LetterwiseRsa::from_primes(31, 37).unwrap();
        let PublicKey { e, n } = cipher.public_key();

        for c in 0..n {
            let encrypted = mod_pow(c, e, n) as u32;
            assert_eq!(u64::from(cipher.decrypt_symbol(encrypted).unwrap()), c);
        }
    }

    #[test]
    fn test_all() {
        let all = LetterwiseRsa::all();
        assert_eq!(all.len(), 22 * 21 / 2);
        assert_eq!(all[0].primes(), (29, 31));
        assert_eq!(all[1].primes(), (29, 37));
        assert_eq!(all.last().unwrap().primes(), (113, 127));
        assert!(all.iter().all(|c| c.primes().0 < c.primes().1));
    }

    #[test]
    fn test_invalid_primes() {
        assert!(LetterwiseRsa::from_primes(31, 31).is_err());
        assert!(LetterwiseRsa::from_primes(31, 33).is_err());
    }

    #[test]
    fn test_primes_are_unordered() {
        let a = LetterwiseRsa::from_primes(127, 83).unwrap();
        let b = LetterwiseRsa::from_primes(83, 127).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.primes(), (83, 127));
    }

    #[test]
    fn test_random_matches_enumeration() {
        let all = LetterwiseRsa::all();

        for seed in 0..50 {
            let cipher = LetterwiseRsa::random(&mut StdRng::seed_from_u64(seed)).unwrap();
            let (p, q) = cipher.primes();
            assert!(p < q, "seed {}: {}", seed, cipher);
            assert!(all.contains(&cipher), "seed {}: {}", seed, cipher);
        }
    }

    #[test]
    fn test_modulus_too_large() {
        // 100003 * 100019 > u32::MAX
        match LetterwiseRsa::from_primes(100_003, 100_019) {
            Err(Error::InvalidKey(_)) => {}
            other => panic!("expected InvalidKey, got {:?}", other),
        }

        // the product overflows u64
        match LetterwiseRsa::from_primes(4_294_967_311, 4_294_967_357) {
            Err(Error::InvalidKey(_)) => {}
            other => panic!("expected InvalidKey, got {:?}", other),
        }
    }

    #[test]
    fn test_largest_modulus_round_trip() {
        // 65521 * 65519 still fits in a u32
        let cipher = LetterwiseRsa::from_primes(65_521, 65_519).unwrap();
        let ciphertext = cipher.encrypt(PANGRAM).unwrap();
        assert_eq!(cipher.decrypt(&ciphertext.into()).unwrap(), PANGRAM);
    }

    #[test]
    fn test_unsupported_symbol() {
        let cipher = LetterwiseRsa::from_primes(29, 31).unwrap();
        match cipher.encrypt("snowman \u{2603}") {
            Err(Error::UnsupportedSymbol { symbol, modulus }) => {
                assert_eq!(symbol, 0x2603);
                assert_eq!(modulus, 899);
            }
            other => panic!("expected UnsupportedSymbol, got {:?}", other),
        }
    }

    #[test]
    fn test_decrypt_representations() {
        let cipher = LetterwiseRsa::from_primes(41, 43).unwrap();
        let ciphertext = cipher.encrypt("Hi").unwrap();
        let codes = Symbols::parse_sequence(&ciphertext).unwrap().codes().to_vec();

        assert_eq!(cipher.decrypt(&ciphertext.clone().into()).unwrap(), "Hi");
        assert_eq!(cipher.decrypt(&codes.clone().into()).unwrap(), "Hi");
        assert_eq!(cipher.decrypt(&u64::from(codes[0]).into()).unwrap(), "H");
        assert!(cipher.decrypt(&"not numbers".into()).is_err());
    }

    #[test]
    fn test_random_is_seeded() {
        let a = LetterwiseRsa::random(&mut StdRng::seed_from_u64(7)).unwrap();
        let b = LetterwiseRsa::random(&mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);

        let (p, q) = a.primes();
        assert_ne!(p, q);
        assert!(PRIMES.contains(&p) && PRIMES.contains(&q));
    }
}
