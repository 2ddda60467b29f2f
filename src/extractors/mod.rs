//! Site-specific article extractors.
//!
//! Every supported news site gets one extractor that knows how to turn that
//! site's raw HTML into plain article text. The pipeline never parses HTML
//! itself; it resolves an extractor by the URL's host and delegates.
//!
//! # Site keys
//!
//! Extractors are registered under a normalized site key: the URL host with
//! every `.` replaced by `_` (`inosmi.ru` → `inosmi_ru`). Resolving a host with
//! no registered extractor fails fast with [`ExtractorError::UnregisteredSite`],
//! which the pipeline reports as `PARSING_ERROR`. An unsupported site is a
//! per-article outcome, never a crash.
//!
//! # Supported Sites
//!
//! | Site | Module |
//! |------|--------|
//! | inosmi.ru | [`inosmi`] |

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use url::Url;

pub mod inosmi;

/// One site's HTML-to-text conversion.
pub trait Extract: Send + Sync {
    /// Convert raw page HTML into plain article text.
    fn extract(&self, html: &str) -> String;
}

impl std::fmt::Debug for dyn Extract + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Extract")
    }
}

#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("no extractor registered for site {key}")]
    UnregisteredSite { key: String },
    #[error("URL has no host component: {url}")]
    NoHost { url: String },
}

/// Normalized site key for a URL host: dots become underscores.
pub fn site_key(host: &str) -> String {
    host.replace('.', "_")
}

/// Static table from site key to extractor, fixed for the lifetime of a run.
pub struct ExtractorRegistry {
    table: HashMap<String, Arc<dyn Extract>>,
}

impl ExtractorRegistry {
    /// An empty registry. Tests use this to wire extractors for mock hosts.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// The registry with every built-in site extractor wired in.
    pub fn with_builtin_sites() -> Self {
        let mut registry = Self::new();
        registry.register("inosmi_ru", Arc::new(inosmi::InosmiExtractor));
        registry
    }

    pub fn register(&mut self, key: impl Into<String>, extractor: Arc<dyn Extract>) {
        self.table.insert(key.into(), extractor);
    }

    /// Look up the extractor for `url`'s host.
    pub fn resolve(&self, url: &Url) -> Result<&dyn Extract, ExtractorError> {
        let host = url.host_str().ok_or_else(|| ExtractorError::NoHost {
            url: url.to_string(),
        })?;
        let key = site_key(host);
        self.table
            .get(&key)
            .map(Arc::as_ref)
            .ok_or(ExtractorError::UnregisteredSite { key })
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_builtin_sites()
    }
}
