//! Article text tokenization.
//!
//! Turns extracted plain text into the normalized token sequence the scorer
//! consumes. Tokens are lowercased Unicode words; anything shorter than three
//! characters is dropped, so prepositions and particles never dilute the rate.
//!
//! A [`Tokenizer`] compiles its word pattern once at construction and is
//! immutable afterwards, so a single instance is shared across all concurrent
//! article tasks behind an `Arc` with no locking.

use once_cell::sync::Lazy;
use regex::Regex;

/// Words keep letters, digits, and inner hyphens ("что-то", "covid-19").
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{Alphabetic}\p{N}]+(?:-[\p{Alphabetic}\p{N}]+)*").unwrap());

/// Tokens shorter than this are noise (conjunctions, particles) and skipped.
const MIN_TOKEN_CHARS: usize = 3;

/// Splits article text into normalized word tokens.
#[derive(Debug, Default)]
pub struct Tokenizer {
    _private: (),
}

impl Tokenizer {
    pub fn new() -> Self {
        // Force the pattern compilation at startup rather than inside the
        // first article task.
        Lazy::force(&WORD_PATTERN);
        Self { _private: () }
    }

    /// Split `text` into lowercase word tokens, in document order.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        WORD_PATTERN
            .find_iter(text)
            .filter(|word| word.as_str().chars().count() >= MIN_TOKEN_CHARS)
            .map(|word| word.as_str().to_lowercase())
            .collect()
    }
}
