use crate::cipher::CipherKind;
use clap::Parser;
use std::path::PathBuf;

pub const FREQUENCIES_VAR: &str = "SUBSTCRACK_FREQUENCIES";
pub const CIPHER_VAR: &str = "SUBSTCRACK_CIPHER";
pub const LANGUAGE_VAR: &str = "SUBSTCRACK_LANGUAGE";

const DEFAULT_FREQUENCIES: &str = "data/frequencies.json";

fn parse_cipher(s: &str) -> Result<CipherKind, String> {
    s.parse().map_err(|err| format!("{}", err))
}

fn parse_language(s: &str) -> Result<String, String> {
    let language = s.trim().to_lowercase();
    if language.is_empty() {
        Err("language must not be blank".to_string())
    } else {
        Ok(language)
    }
}

/// Crack a substitution cipher read from stdin.
///
/// Every option can also be set through its `SUBSTCRACK_*` environment
/// variable; a flag on the command line wins.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "substcrack", version)]
pub struct Config {
    /// Reference letter frequencies (JSON)
    #[arg(long, env = FREQUENCIES_VAR, default_value = DEFAULT_FREQUENCIES)]
    pub frequencies: PathBuf,

    /// Cipher to crack (caesar, letterwise-rsa)
    #[arg(long, env = CIPHER_VAR, default_value = "caesar", value_parser = parse_cipher)]
    pub cipher: CipherKind,

    /// Only score against this language
    #[arg(long, env = LANGUAGE_VAR, value_parser = parse_language)]
    pub language: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            frequencies: PathBuf::from(DEFAULT_FREQUENCIES),
            cipher: CipherKind::Caesar,
            language: None,
        }
    }
}
