use failure::Fail;
use std::io;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "invalid key: {}", _0)]
    InvalidKey(String),

    #[fail(display = "{} has no inverse modulo {}", value, modulus)]
    NoModularInverse { value: i64, modulus: i64 },

    #[fail(display = "symbol {} cannot be encoded with modulus {}", symbol, modulus)]
    UnsupportedSymbol { symbol: u32, modulus: u64 },

    #[fail(display = "ciphertext value {} is out of range for modulus {}", symbol, modulus)]
    SymbolOutOfRange { symbol: u32, modulus: u64 },

    #[fail(display = "malformed ciphertext: {}", _0)]
    MalformedCiphertext(String),

    #[fail(display = "invalid frequency table: {}", _0)]
    InvalidFrequency(String),

    #[fail(display = "unknown cipher '{}'", _0)]
    UnknownCipher(String),

    #[fail(display = "unknown language '{}'", _0)]
    UnknownLanguage(String),

    #[fail(display = "no reference frequencies available")]
    NoReferences,

    #[fail(display = "no key could decrypt the ciphertext")]
    NoCandidate,

    #[fail(display = "{}", _0)]
    Io(#[cause] io::Error),

    #[fail(display = "{}", _0)]
    Json(#[cause] serde_json::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
