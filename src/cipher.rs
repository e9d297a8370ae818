use crate::caesar::CaesarCipher;
use crate::encoding::{to_char, Ciphertext, Symbols};
use crate::error::{Error, Result};
use crate::rsa::LetterwiseRsa;
use std::fmt;
use std::str::FromStr;

/// A cipher that substitutes each symbol independently, with a finite key space.
pub trait SubstitutionCipher: Sized {
    fn encrypt(&self, plaintext: &str) -> Result<String>;

    /// Decrypt a single canonical ciphertext symbol to a character code.
    fn decrypt_symbol(&self, symbol: u32) -> Result<u32>;

    /// Normalize any accepted ciphertext representation into the symbols
    /// `decrypt_symbol` works on.
    fn adapt_ciphertext(ciphertext: &Ciphertext) -> Result<Symbols>;

    /// One cipher per key, in a fixed order.
    fn all() -> Vec<Self>;

    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<String> {
        Self::adapt_ciphertext(ciphertext)?
            .iter()
            .map(|symbol| self.decrypt_symbol(symbol).and_then(to_char))
            .collect()
    }
}

/// Which cipher variant to work with, without a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherKind {
    Caesar,
    LetterwiseRsa,
}

impl CipherKind {
    pub fn all(self) -> Vec<Cipher> {
        match self {
            CipherKind::Caesar => CaesarCipher::all().into_iter().map(Cipher::Caesar).collect(),
            CipherKind::LetterwiseRsa => LetterwiseRsa::all()
                .into_iter()
                .map(Cipher::LetterwiseRsa)
                .collect(),
        }
    }

    pub fn adapt_ciphertext(self, ciphertext: &Ciphertext) -> Result<Symbols> {
        match self {
            CipherKind::Caesar => CaesarCipher::adapt_ciphertext(ciphertext),
            CipherKind::LetterwiseRsa => LetterwiseRsa::adapt_ciphertext(ciphertext),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CipherKind::Caesar => CaesarCipher::NAME,
            CipherKind::LetterwiseRsa => LetterwiseRsa::NAME,
        }
    }
}

impl FromStr for CipherKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "caesar" | "rot" => Ok(CipherKind::Caesar),
            "letterwise-rsa" | "rsa" => Ok(CipherKind::LetterwiseRsa),
            other => Err(Error::UnknownCipher(other.to_string())),
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A keyed cipher of any supported variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cipher {
    Caesar(CaesarCipher),
    LetterwiseRsa(LetterwiseRsa),
}

impl Cipher {
    pub fn kind(&self) -> CipherKind {
        match self {
            Cipher::Caesar(_) => CipherKind::Caesar,
            Cipher::LetterwiseRsa(_) => CipherKind::LetterwiseRsa,
        }
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        match self {
            Cipher::Caesar(c) => c.encrypt(plaintext),
            Cipher::LetterwiseRsa(c) => c.encrypt(plaintext),
        }
    }

    pub fn decrypt(&self, ciphertext: &Ciphertext) -> Result<String> {
        match self {
            Cipher::Caesar(c) => c.decrypt(ciphertext),
            Cipher::LetterwiseRsa(c) => c.decrypt(ciphertext),
        }
    }

    pub fn decrypt_symbol(&self, symbol: u32) -> Result<u32> {
        match self {
            Cipher::Caesar(c) => c.decrypt_symbol(symbol),
            Cipher::LetterwiseRsa(c) => c.decrypt_symbol(symbol),
        }
    }
}

impl From<CaesarCipher> for Cipher {
    fn from(c: CaesarCipher) -> Self {
        Cipher::Caesar(c)
    }
}

impl From<LetterwiseRsa> for Cipher {
    fn from(c: LetterwiseRsa) -> Self {
        Cipher::LetterwiseRsa(c)
    }
}

impl fmt::Display for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cipher::Caesar(c) => write!(f, "{}", c),
            Cipher::LetterwiseRsa(c) => write!(f, "{}", c),
        }
    }
}
