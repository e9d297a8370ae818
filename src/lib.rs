//! Statistical cryptanalysis of letter-substitution ciphers.
//!
//! A ciphertext is cracked by trying every key of its cipher and comparing the
//! decrypted letter frequencies with reference tables for a set of languages.

pub mod caesar;
pub mod cipher;
pub mod config;
pub mod crack;
pub mod encoding;
pub mod error;
pub mod frequency;
pub mod modular;
pub mod references;
pub mod rsa;

pub use crate::caesar::CaesarCipher;
pub use crate::cipher::{Cipher, CipherKind, SubstitutionCipher};
pub use crate::config::Config;
pub use crate::crack::{Cracker, Guess};
pub use crate::encoding::{Ciphertext, Symbols};
pub use crate::error::{Error, Result};
pub use crate::frequency::{FrequencyAnalysis, LanguageGuess};
pub use crate::references::References;
pub use crate::rsa::LetterwiseRsa;
