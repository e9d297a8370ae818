//! Brute-force search of a cipher's key space by frequency analysis.
//!
//! Rather than decrypting the whole ciphertext once per key, the ciphertext
//! symbol distribution is computed once and its symbols are decrypted. That
//! keeps every candidate key at a cost proportional to the number of distinct
//! symbols, whatever the length of the ciphertext.

use crate::cipher::{Cipher, CipherKind};
use crate::encoding::{to_char, Ciphertext};
use crate::error::{Error, Result};
use crate::frequency::FrequencyAnalysis;
use crate::references::References;
use tracing::{debug, trace, warn};

/// Best (key, language) pair found by `Cracker::crack`. Lower distance is better.
#[derive(Debug, Clone, PartialEq)]
pub struct Guess {
    pub cipher: Cipher,
    pub language: String,
    pub distance: f64,
    /// The ciphertext had no symbols, every key scored the same.
    pub inconclusive: bool,
}

impl Guess {
    pub fn decrypt(&self, ciphertext: &Ciphertext) -> Result<String> {
        self.cipher.decrypt(ciphertext)
    }
}

pub struct Cracker<'a> {
    kind: CipherKind,
    references: &'a References,
    language: Option<String>,
}

impl<'a> Cracker<'a> {
    pub fn new(kind: CipherKind, references: &'a References) -> Self {
        Cracker {
            kind,
            references,
            language: None,
        }
    }

    /// Only score candidates against `language`.
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Try every key and keep the one whose decryption is closest to a
    /// reference language.
    ///
    /// Keys are tried in `CipherKind::all` order and languages in store order;
    /// a candidate replaces the current best only when strictly closer, so
    /// exact ties go to the first one seen.
    pub fn crack(&self, ciphertext: &Ciphertext) -> Result<Guess> {
        let references = self.candidate_languages()?;

        let symbols = self.kind.adapt_ciphertext(ciphertext)?;
        let encrypted = FrequencyAnalysis::raw(symbols.iter());
        let inconclusive = encrypted.is_empty();
        if inconclusive {
            warn!("Ciphertext is empty, the {} guess is meaningless", self.kind);
        }

        let mut best: Option<Guess> = None;

        for cipher in self.kind.all() {
            let remapped =
                encrypted.try_remap(|symbol| cipher.decrypt_symbol(symbol).and_then(to_char));
            let decrypted = match remapped {
                Ok(analysis) => analysis.alphabetic(),
                Err(err) => {
                    trace!("Skipping {}: {}", cipher, err);
                    continue;
                }
            };

            for (language, reference) in &references {
                let distance = decrypted.distance_from(reference);
                if best.as_ref().map_or(true, |b| distance < b.distance) {
                    debug!("New best guess {} as {} at distance {}", cipher, language, distance);
                    best = Some(Guess {
                        cipher,
                        language: language.to_string(),
                        distance,
                        inconclusive,
                    });
                }
            }
        }

        best.ok_or(Error::NoCandidate)
    }

    fn candidate_languages(&self) -> Result<Vec<(&'a str, &'a FrequencyAnalysis<char>)>> {
        if self.references.is_empty() {
            return Err(Error::NoReferences);
        }

        let references: &'a References = self.references;
        match &self.language {
            Some(language) => {
                let (name, table) = references
                    .iter()
                    .find(|(name, _)| *name == language.as_str())
                    .ok_or_else(|| Error::UnknownLanguage(language.clone()))?;
                Ok(vec![(name, table)])
            }
            None => Ok(references.iter().collect()),
        }
    }
}
