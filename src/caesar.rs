use crate::cipher::SubstitutionCipher;
use crate::encoding::{Ciphertext, Symbols};
use crate::error::{Error, Result};
use crate::frequency::ALPHABET_LEN;
use std::fmt;

const KEYS: u32 = ALPHABET_LEN as u32;

/// Shift every Latin letter by `key` places, keeping its case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaesarCipher {
    key: u32,
}

impl CaesarCipher {
    pub const NAME: &'static str = "caesar";

    pub fn new(key: u32) -> Result<Self> {
        if key >= KEYS {
            return Err(Error::InvalidKey(format!(
                "caesar key must be below {}, got {}",
                KEYS, key
            )));
        }
        Ok(CaesarCipher { key })
    }

    /// ROT-`key`, wrapping keys of 26 and above.
    pub fn rot(key: u32) -> Self {
        CaesarCipher { key: key % KEYS }
    }

    pub fn key(&self) -> u32 {
        self.key
    }
}

fn shift(code: u32, by: u32) -> u32 {
    let base = if (u32::from(b'a')..=u32::from(b'z')).contains(&code) {
        u32::from(b'a')
    } else if (u32::from(b'A')..=u32::from(b'Z')).contains(&code) {
        u32::from(b'A')
    } else {
        return code;
    };

    base + (code - base + by) % KEYS
}

impl SubstitutionCipher for CaesarCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let codes = Symbols::from_string(plaintext)
            .iter()
            .map(|c| shift(c, self.key))
            .collect();

        Symbols::from_codes(codes).string()
    }

    fn decrypt_symbol(&self, symbol: u32) -> Result<u32> {
        Ok(shift(symbol, KEYS - self.key))
    }

    fn adapt_ciphertext(ciphertext: &Ciphertext) -> Result<Symbols> {
        match ciphertext {
            Ciphertext::Text(s) => Ok(Symbols::from_string(s)),
            Ciphertext::Number(n) => Symbols::from_number(*n),
            Ciphertext::Sequence(codes) => Ok(Symbols::from_codes(codes.clone())),
        }
    }

    fn all() -> Vec<Self> {
        (0..KEYS).map(|key| CaesarCipher { key }).collect()
    }
}

impl fmt::Display for CaesarCipher {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(key={})", Self::NAME, self.key)
    }
}
