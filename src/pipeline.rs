//! The per-article processing pipeline and its batch orchestrator.
//!
//! [`Pipeline`] holds the state shared by every article task: the HTTP
//! client, the extractor registry, the tokenizer, and the charged-word set.
//! All of it is constructed once per run and read-only afterwards, so tasks
//! share it through `Arc` without locks.
//!
//! Per article the steps are strictly sequential: fetch under a deadline,
//! resolve the site extractor, extract plain text, tokenize, score. The three
//! recoverable failures (timeout, fetch error, unknown site) become a result
//! record for that URL and never touch sibling articles. Any other failure is
//! a bug and propagates out of [`Pipeline::run`] as [`PipelineError::Task`].

use crate::extractors::ExtractorRegistry;
use crate::fetch::{self, FetchError};
use crate::models::{ProcessingResult, Status};
use crate::score::jaundice_rate;
use crate::tokenize::Tokenizer;
use reqwest::Client;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, instrument, warn};
use url::Url;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("article task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Shared, read-only state for one batch run.
pub struct Pipeline {
    client: Client,
    registry: Arc<ExtractorRegistry>,
    tokenizer: Arc<Tokenizer>,
    charged_words: Arc<HashSet<String>>,
    fetch_deadline: Duration,
}

impl Pipeline {
    /// Build a pipeline over an already-loaded charged-word set, with the
    /// built-in site extractors.
    pub fn new(
        charged_words: HashSet<String>,
        fetch_deadline: Duration,
    ) -> Result<Self, PipelineError> {
        Self::with_registry(ExtractorRegistry::with_builtin_sites(), charged_words, fetch_deadline)
    }

    /// Build a pipeline with an explicit extractor registry.
    pub fn with_registry(
        registry: ExtractorRegistry,
        charged_words: HashSet<String>,
        fetch_deadline: Duration,
    ) -> Result<Self, PipelineError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            registry: Arc::new(registry),
            tokenizer: Arc::new(Tokenizer::new()),
            charged_words: Arc::new(charged_words),
            fetch_deadline,
        })
    }

    /// Process every URL concurrently and return one record per URL.
    ///
    /// One task is spawned per URL up front; the call returns only after all
    /// of them have reached a terminal state. Duplicated URLs are processed
    /// independently. Output order is completion order, not input order;
    /// callers needing stable order must sort.
    ///
    /// A panicked task (tokenizer crash or similar) does not disturb the
    /// other tasks: the remaining results are still collected, then the join
    /// failure is propagated.
    #[instrument(level = "info", skip_all, fields(urls = urls.len()))]
    pub async fn run(&self, urls: Vec<String>) -> Result<Vec<ProcessingResult>, PipelineError> {
        let started = Instant::now();
        let expected = urls.len();
        let mut tasks = JoinSet::new();

        for url in urls {
            let client = self.client.clone();
            let registry = Arc::clone(&self.registry);
            let tokenizer = Arc::clone(&self.tokenizer);
            let charged_words = Arc::clone(&self.charged_words);
            let deadline = self.fetch_deadline;
            tasks.spawn(async move {
                process_article(&client, &registry, &tokenizer, &charged_words, deadline, url)
                    .await
            });
        }

        let mut results = Vec::with_capacity(expected);
        let mut fatal = None;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!(error = %e, "Article task did not complete");
                    fatal.get_or_insert(e);
                }
            }
        }

        if let Some(e) = fatal {
            return Err(PipelineError::Task(e));
        }

        info!(
            count = results.len(),
            elapsed_secs = started.elapsed().as_secs_f64().round(),
            "Analysis finished"
        );
        Ok(results)
    }
}

/// Run the full state machine for one URL.
///
/// The first failure wins: deadline overrun reports `TIMEOUT`, a bad response
/// or broken transport reports `FETCH_ERROR`, an unsupported host reports
/// `PARSING_ERROR`. Only the fetch suspends; extraction, tokenization, and
/// scoring run synchronously on the task.
#[instrument(level = "debug", skip_all, fields(%url))]
async fn process_article(
    client: &Client,
    registry: &ExtractorRegistry,
    tokenizer: &Tokenizer,
    charged_words: &HashSet<String>,
    deadline: Duration,
    url: String,
) -> ProcessingResult {
    let html = match fetch::fetch(client, &url, deadline).await {
        Ok(html) => html,
        Err(FetchError::Timeout(deadline)) => {
            warn!(?deadline, "Fetch timed out");
            return ProcessingResult::failed(url, Status::Timeout);
        }
        Err(e @ (FetchError::Status(_) | FetchError::Transport(_))) => {
            warn!(error = %e, "Fetch failed");
            return ProcessingResult::failed(url, Status::FetchError);
        }
    };

    // The URL parsed on the wire already; a parse failure here means the
    // string never named a host we could have an extractor for.
    let extractor = match Url::parse(&url) {
        Ok(parsed) => match registry.resolve(&parsed) {
            Ok(extractor) => extractor,
            Err(e) => {
                warn!(error = %e, "No extractor for site");
                return ProcessingResult::failed(url, Status::ParsingError);
            }
        },
        Err(e) => {
            warn!(error = %e, "URL is not parseable");
            return ProcessingResult::failed(url, Status::ParsingError);
        }
    };

    let text = extractor.extract(&html);
    let tokens = tokenizer.normalize(&text);
    let score = jaundice_rate(&tokens, charged_words);
    debug!(words = tokens.len(), score, "Scored article");

    ProcessingResult::ok(url, score, tokens.len())
}
