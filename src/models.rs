//! Data models for per-article processing outcomes.
//!
//! This module defines the core data structures shared by the batch CLI and
//! the HTTP service:
//! - [`Status`]: the exhaustive outcome taxonomy for one processed URL
//! - [`ProcessingResult`]: the externally visible record produced per URL
//!
//! The serialized field names (`url`, `status`, `score`, `word_count`) are the
//! wire format of the service endpoint and the shape printed in batch mode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of processing a single article URL.
///
/// Exactly one value is assigned per URL; the first failure encountered in the
/// pipeline wins and is terminal. Anything that is not one of the three
/// recoverable failures is a bug and propagates instead of being classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Status {
    /// Fetched, extracted, and scored successfully.
    #[serde(rename = "OK")]
    Ok,
    /// The fetch deadline elapsed before the response completed.
    #[serde(rename = "TIMEOUT")]
    Timeout,
    /// The server answered with a non-2xx status, or the transport failed.
    #[serde(rename = "FETCH_ERROR")]
    FetchError,
    /// No extractor is registered for the URL's host.
    #[serde(rename = "PARSING_ERROR")]
    ParsingError,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Ok => "OK",
            Status::Timeout => "TIMEOUT",
            Status::FetchError => "FETCH_ERROR",
            Status::ParsingError => "PARSING_ERROR",
        };
        f.write_str(s)
    }
}

/// The record produced for one URL of a batch run.
///
/// Invariant: `score` and `word_count` are present if and only if
/// `status == Status::Ok`. The constructors below are the only way the
/// pipeline builds these, so the invariant holds by construction.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProcessingResult {
    /// The article URL exactly as submitted.
    pub url: String,
    /// The terminal outcome for this URL.
    pub status: Status,
    /// Charged-word percentage, rounded to 2 decimals. Only on `OK`.
    pub score: Option<f64>,
    /// Number of tokens the article produced. Only on `OK`.
    pub word_count: Option<usize>,
}

impl ProcessingResult {
    /// Build a successful record carrying its score and token count.
    pub fn ok(url: String, score: f64, word_count: usize) -> Self {
        Self {
            url,
            status: Status::Ok,
            score: Some(score),
            word_count: Some(word_count),
        }
    }

    /// Build a failed record for one of the recoverable failure statuses.
    pub fn failed(url: String, status: Status) -> Self {
        debug_assert!(status != Status::Ok, "failed() takes a failure status");
        Self {
            url,
            status,
            score: None,
            word_count: None,
        }
    }
}

impl fmt::Display for ProcessingResult {
    /// Batch-mode formatting: one block per record, dashes for the fields a
    /// failure status never fills.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "URL: {}", self.url)?;
        writeln!(f, "Status: {}", self.status)?;
        match self.score {
            Some(score) => writeln!(f, "Score: {score}")?,
            None => writeln!(f, "Score: -")?,
        }
        match self.word_count {
            Some(count) => write!(f, "Words in article: {count}"),
            None => write!(f, "Words in article: -"),
        }
    }
}
