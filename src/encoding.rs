use crate::error::{Error, Result};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A serialized number sequence: `[1, 2, 3]`, `1 2 3` or a single `42`
    static ref SEQUENCE_PATTERN: Regex = Regex::new(r"^\s*\[?[\d,\s]*\]?\s*$").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new(r"\d+").unwrap();
}

/// Ciphertext as handed over by a caller, before a cipher adapts it.
#[derive(Debug, Clone, PartialEq)]
pub enum Ciphertext {
    Text(String),
    Number(u64),
    Sequence(Vec<u32>),
}

impl From<&str> for Ciphertext {
    fn from(s: &str) -> Self {
        Ciphertext::Text(s.to_string())
    }
}

impl From<String> for Ciphertext {
    fn from(s: String) -> Self {
        Ciphertext::Text(s)
    }
}

impl From<u64> for Ciphertext {
    fn from(n: u64) -> Self {
        Ciphertext::Number(n)
    }
}

impl From<Vec<u32>> for Ciphertext {
    fn from(codes: Vec<u32>) -> Self {
        Ciphertext::Sequence(codes)
    }
}

/// Canonical symbol-code sequence every cipher decrypts from.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbols {
    codes: Vec<u32>,
}

impl Symbols {
    pub fn from_codes(codes: Vec<u32>) -> Symbols {
        Symbols { codes }
    }

    pub fn from_string(s: &str) -> Symbols {
        let codes = s.chars().map(|c| c as u32).collect();
        Symbols::from_codes(codes)
    }

    pub fn from_number(n: u64) -> Result<Symbols> {
        let code = to_code(n)?;
        Ok(Symbols::from_codes(vec![code]))
    }

    /// Parse a textual number sequence.
    pub fn parse_sequence(s: &str) -> Result<Symbols> {
        if !SEQUENCE_PATTERN.is_match(s) {
            return Err(Error::MalformedCiphertext(format!(
                "expected a sequence of numbers, got '{}'",
                truncate(s)
            )));
        }

        let codes = NUMBER_PATTERN
            .find_iter(s)
            .map(|m| {
                m.as_str()
                    .parse::<u64>()
                    .map_err(|_| Error::MalformedCiphertext(format!("'{}' is too large", m.as_str())))
                    .and_then(to_code)
            })
            .collect::<Result<Vec<u32>>>()?;

        Ok(Symbols::from_codes(codes))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn codes(&self) -> &[u32] {
        &self.codes
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.codes.iter().cloned()
    }

    pub fn string(&self) -> Result<String> {
        self.iter().map(to_char).collect()
    }

    /// `[1,2,3]`
    pub fn serialize(&self) -> String {
        format!("[{}]", self.codes.iter().join(","))
    }
}

pub fn to_char(code: u32) -> Result<char> {
    char::from_u32(code)
        .ok_or_else(|| Error::MalformedCiphertext(format!("{} is not a valid character code", code)))
}

fn to_code(n: u64) -> Result<u32> {
    if n > u64::from(u32::max_value()) {
        return Err(Error::MalformedCiphertext(format!("{} is too large", n)));
    }
    Ok(n as u32)
}

fn truncate(s: &str) -> String {
    s.chars().take(32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let symbols = Symbols::from_string("Ab ");
        assert_eq!(symbols.codes(), &[65, 98, 32]);
        assert_eq!(symbols.string().unwrap(), "Ab ");
    }

    #[test]
    fn test_parse_sequence() {
        let expected = vec![72, 105, 33];

        assert_eq!(Symbols::parse_sequence("[72,105,33]").unwrap().codes(), &expected[..]);
        assert_eq!(Symbols::parse_sequence("[72, 105, 33]").unwrap().codes(), &expected[..]);
        assert_eq!(Symbols::parse_sequence("72 105 33\n").unwrap().codes(), &expected[..]);
        assert_eq!(Symbols::parse_sequence("42").unwrap().codes(), &[42]);
        assert!(Symbols::parse_sequence("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_sequence_invalid() {
        assert!(Symbols::parse_sequence("[1, a, 3]").is_err());
        assert!(Symbols::parse_sequence("hello").is_err());
        assert!(Symbols::parse_sequence("99999999999").is_err());
    }

    #[test]
    fn test_serialize() {
        let symbols = Symbols::from_codes(vec![1, 20, 300]);
        assert_eq!(symbols.serialize(), "[1,20,300]");
        assert_eq!(Symbols::parse_sequence(&symbols.serialize()).unwrap(), symbols);
    }

    #[test]
    fn test_string_invalid_code() {
        let symbols = Symbols::from_codes(vec![0xD800]);
        assert!(symbols.string().is_err());
    }

    #[test]
    fn test_from_number() {
        assert_eq!(Symbols::from_number(7).unwrap().codes(), &[7]);
        assert!(Symbols::from_number(1 << 40).is_err());
    }
}
