//! Article download with a hard per-request deadline.
//!
//! One GET per article, no retries: a failed attempt is terminal for that URL
//! within the run. The deadline covers the whole exchange, connect included,
//! and is enforced with `tokio::time::timeout` so a stalled connection cannot
//! hold an article task open.

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Default fetch deadline, matching the batch and service defaults.
pub const DEFAULT_FETCH_DEADLINE: Duration = Duration::from_secs(3);

/// Why a fetch failed. The pipeline maps each variant to exactly one
/// result status: `Timeout` to TIMEOUT, the other two to FETCH_ERROR.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("fetch did not complete within {0:?}")]
    Timeout(Duration),
    #[error("server answered with HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("transport failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Download `url` and return the response body as text.
///
/// The deadline is measured from call start. A non-2xx response is an error
/// even though the exchange itself completed.
#[instrument(level = "debug", skip(client))]
pub async fn fetch(client: &Client, url: &str, deadline: Duration) -> Result<String, FetchError> {
    let exchange = async {
        let response = client.get(url).send().await?;
        if let Err(e) = response.error_for_status_ref() {
            // e.status() is always Some for error_for_status failures.
            return Err(match e.status() {
                Some(code) => FetchError::Status(code),
                None => FetchError::Transport(e),
            });
        }
        let body = response.text().await?;
        Ok(body)
    };

    let body = tokio::time::timeout(deadline, exchange)
        .await
        .map_err(|_| FetchError::Timeout(deadline))??;

    debug!(bytes = body.len(), "Fetched article body");
    Ok(body)
}
