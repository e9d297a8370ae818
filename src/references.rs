//! Reference letter frequencies, one table per language.
//!
//! The database is a JSON object `{ "english": { "a": 0.0817, ... }, ... }`
//! produced offline from training texts. Languages keep the order they have
//! in the file, which fixes the tie-break order of every search over them.

use crate::error::{Error, Result};
use crate::frequency::FrequencyAnalysis;
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct References {
    languages: IndexMap<String, FrequencyAnalysis<char>>,
}

impl References {
    pub fn from_analyses<I>(analyses: I) -> References
    where
        I: IntoIterator<Item = (String, FrequencyAnalysis<char>)>,
    {
        References {
            languages: analyses.into_iter().collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<References> {
        let raw: IndexMap<String, IndexMap<String, f64>> = serde_json::from_str(json)?;
        let mut languages = IndexMap::with_capacity(raw.len());

        for (language, table) in raw {
            let mut frequencies: BTreeMap<char, f64> = BTreeMap::new();
            for (letter, freq) in table {
                let (letter, freq) = parse_entry(&language, &letter, freq)?;
                // "A" and "a" name the same letter
                if frequencies.insert(letter, freq).is_some() {
                    return Err(Error::InvalidFrequency(format!(
                        "{}: duplicate letter '{}'",
                        language, letter
                    )));
                }
            }

            languages.insert(language, FrequencyAnalysis::from_frequencies(frequencies));
        }

        Ok(References { languages })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<References> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let references = References::from_json(&contents)?;

        debug!(
            "Loaded {} reference languages from {}",
            references.len(),
            path.display()
        );
        Ok(references)
    }

    pub fn get(&self, language: &str) -> Option<&FrequencyAnalysis<char>> {
        self.languages.get(language)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrequencyAnalysis<char>)> {
        self.languages.iter().map(|(l, f)| (l.as_str(), f))
    }
}

fn parse_entry(language: &str, letter: &str, freq: f64) -> Result<(char, f64)> {
    let mut chars = letter.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_lowercase(),
        _ => {
            return Err(Error::InvalidFrequency(format!(
                "{}: '{}' is not a letter",
                language, letter
            )))
        }
    };

    if !freq.is_finite() || freq < 0.0 || freq > 1.0 {
        return Err(Error::InvalidFrequency(format!(
            "{}: frequency of '{}' is {}",
            language, c, freq
        )));
    }

    Ok((c, freq))
}
