//! Symbol frequency distributions.
//!
//! Analyses are immutable once built: `remap` and `alphabetic` return new
//! instances. A symbol missing from the distribution has frequency 0.

use crate::error::Result;
use crate::references::References;
use itertools::{EitherOrBoth, Itertools};
use std::collections::BTreeMap;

pub const ALPHABET_LEN: u8 = 26;

/// Relative occurrence rate of each symbol in a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyAnalysis<K: Ord = char> {
    frequencies: BTreeMap<K, f64>,
}

/// The reference language closest to an analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageGuess {
    pub language: String,
    pub distance: f64,
}

impl<K: Ord + Copy> FrequencyAnalysis<K> {
    pub fn empty() -> Self {
        FrequencyAnalysis {
            frequencies: BTreeMap::new(),
        }
    }

    /// Build an analysis from already normalized frequencies.
    pub fn from_frequencies<I: IntoIterator<Item = (K, f64)>>(frequencies: I) -> Self {
        FrequencyAnalysis {
            frequencies: frequencies.into_iter().collect(),
        }
    }

    /// Frequencies of every symbol in `symbols`, nothing filtered.
    ///
    /// An empty input gives an empty analysis, i.e. all frequencies 0.
    pub fn raw<I: IntoIterator<Item = K>>(symbols: I) -> Self {
        let mut counts: BTreeMap<K, usize> = BTreeMap::new();
        let mut total = 0usize;

        for symbol in symbols {
            *counts.entry(symbol).or_insert(0) += 1;
            total += 1;
        }

        if total == 0 {
            return Self::empty();
        }

        let frequencies = counts
            .into_iter()
            .map(|(symbol, count)| (symbol, count as f64 / total as f64))
            .collect();

        FrequencyAnalysis { frequencies }
    }

    pub fn get(&self, symbol: &K) -> f64 {
        self.frequencies.get(symbol).cloned().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// True when no symbol has a non-zero frequency.
    pub fn is_empty(&self) -> bool {
        self.frequencies.values().all(|&f| f == 0.0)
    }

    pub fn total(&self) -> f64 {
        self.frequencies.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.frequencies.iter().map(|(&k, &f)| (k, f))
    }

    /// L1 distance over the union of both symbol sets.
    ///
    /// Terms are summed in symbol order, so the result is exactly symmetric.
    pub fn distance_from(&self, other: &FrequencyAnalysis<K>) -> f64 {
        self.frequencies
            .iter()
            .merge_join_by(other.frequencies.iter(), |(a, _), (b, _)| a.cmp(b))
            .map(|pair| match pair {
                EitherOrBoth::Both((_, a), (_, b)) => (a - b).abs(),
                EitherOrBoth::Left((_, f)) | EitherOrBoth::Right((_, f)) => f.abs(),
            })
            .sum()
    }

    /// Replace every symbol by `f(symbol)`. Colliding symbols add up.
    pub fn remap<L, F>(&self, mut f: F) -> FrequencyAnalysis<L>
    where
        L: Ord + Copy,
        F: FnMut(K) -> L,
    {
        let mut frequencies = BTreeMap::new();
        for (&symbol, &freq) in &self.frequencies {
            *frequencies.entry(f(symbol)).or_insert(0.0) += freq;
        }
        FrequencyAnalysis { frequencies }
    }

    /// Like `remap`, but gives up on the first symbol `f` rejects.
    pub fn try_remap<L, F>(&self, mut f: F) -> Result<FrequencyAnalysis<L>>
    where
        L: Ord + Copy,
        F: FnMut(K) -> Result<L>,
    {
        let mut frequencies = BTreeMap::new();
        for (&symbol, &freq) in &self.frequencies {
            *frequencies.entry(f(symbol)?).or_insert(0.0) += freq;
        }
        Ok(FrequencyAnalysis { frequencies })
    }
}

impl FrequencyAnalysis<char> {
    /// Letter frequencies of `text`, case-insensitive. Characters are
    /// lower-cased first, then everything but the 26 Latin letters is ignored.
    pub fn of(text: &str) -> Self {
        Self::raw(
            text.chars()
                .flat_map(char::to_lowercase)
                .filter(char::is_ascii_alphabetic),
        )
    }

    /// Fold upper and lower case into one lower-case bucket per letter and
    /// drop every other symbol.
    pub fn alphabetic(&self) -> Self {
        let frequencies = (0..ALPHABET_LEN)
            .map(|i| {
                let lower = (b'a' + i) as char;
                let upper = (b'A' + i) as char;
                (lower, self.get(&lower) + self.get(&upper))
            })
            .collect();

        FrequencyAnalysis { frequencies }
    }

    /// The reference language at minimal distance, first one winning ties.
    ///
    /// Returns `None` when there is nothing to decide on: an empty analysis
    /// or an empty reference store.
    pub fn detect_language(&self, references: &References) -> Option<LanguageGuess> {
        if self.is_empty() {
            return None;
        }

        let mut guess: Option<LanguageGuess> = None;

        for (language, reference) in references.iter() {
            let distance = self.distance_from(reference);
            if guess.as_ref().map_or(true, |g| distance < g.distance) {
                guess = Some(LanguageGuess {
                    language: language.to_string(),
                    distance,
                });
            }
        }

        guess
    }
}
