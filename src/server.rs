//! HTTP service endpoint.
//!
//! One route: `GET /?urls=<comma-separated list>`. The handler runs the same
//! pipeline as batch mode and answers with the full JSON result array. The two
//! guard failures (no URLs, too many URLs) answer 200 with an error body, the
//! shape clients of the original service expect. A fatal pipeline failure is
//! the only 500.

use crate::models::ProcessingResult;
use crate::pipeline::Pipeline;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Hard cap on URLs per request.
pub const MAX_URLS_PER_REQUEST: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("no urls in query")]
    NoData,
    #[error("more than {MAX_URLS_PER_REQUEST} urls in query")]
    TooMany,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    urls: Option<String>,
}

/// Split the `urls` query parameter into individual URLs.
///
/// Entries are trimmed but otherwise passed through; a malformed URL is not a
/// query error, it becomes a `FETCH_ERROR` record like any other unfetchable
/// article.
fn parse_urls(raw: Option<&str>) -> Result<Vec<String>, QueryError> {
    let raw = raw.filter(|s| !s.is_empty()).ok_or(QueryError::NoData)?;
    let urls: Vec<String> = raw.split(',').map(|url| url.trim().to_string()).collect();
    if urls.len() > MAX_URLS_PER_REQUEST {
        return Err(QueryError::TooMany);
    }
    Ok(urls)
}

async fn handle_analyze(
    State(pipeline): State<Arc<Pipeline>>,
    Query(query): Query<AnalyzeQuery>,
) -> Response {
    let urls = match parse_urls(query.urls.as_deref()) {
        Ok(urls) => urls,
        Err(QueryError::NoData) => {
            return Json(json!({"error": "No data in query."})).into_response();
        }
        Err(QueryError::TooMany) => {
            return Json(json!({
                "error": "too many urls in request, should be 10 or less"
            }))
            .into_response();
        }
    };

    match pipeline.run(urls).await {
        Ok(results) => Json::<Vec<ProcessingResult>>(results).into_response(),
        Err(e) => {
            error!(error = %e, "Pipeline run failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "article processing failed"})),
            )
                .into_response()
        }
    }
}

/// Build the service router around a shared pipeline.
pub fn router(pipeline: Arc<Pipeline>) -> Router {
    Router::new()
        .route("/", get(handle_analyze))
        .with_state(pipeline)
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, pipeline: Pipeline) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Service listening");
    axum::serve(listener, router(Arc::new(pipeline))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::DEFAULT_FETCH_DEADLINE;
    use crate::models::Status;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use std::collections::HashSet;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let charged: HashSet<String> = ["шок".to_string()].into_iter().collect();
        let pipeline = Pipeline::new(charged, DEFAULT_FETCH_DEADLINE).unwrap();
        router(Arc::new(pipeline))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_parse_urls_splits_and_trims() {
        let urls = parse_urls(Some("https://a.ru/1, https://b.ru/2 ,https://c.ru/3")).unwrap();
        assert_eq!(
            urls,
            vec!["https://a.ru/1", "https://b.ru/2", "https://c.ru/3"]
        );
    }

    #[test]
    fn test_parse_urls_rejects_missing_and_empty() {
        assert_eq!(parse_urls(None).unwrap_err(), QueryError::NoData);
        assert_eq!(parse_urls(Some("")).unwrap_err(), QueryError::NoData);
    }

    #[test]
    fn test_parse_urls_enforces_limit() {
        let ten = vec!["https://a.ru"; 10].join(",");
        assert_eq!(parse_urls(Some(&ten)).unwrap().len(), 10);

        let eleven = vec!["https://a.ru"; 11].join(",");
        assert_eq!(parse_urls(Some(&eleven)).unwrap_err(), QueryError::TooMany);
    }

    #[tokio::test]
    async fn test_missing_urls_parameter_answers_guard_body() {
        let (status, body) = get_json(test_router(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"error": "No data in query."}));
    }

    #[tokio::test]
    async fn test_eleven_urls_answers_guard_body() {
        let urls = vec!["https://inosmi.ru/a.html"; 11].join(",");
        let (status, body) = get_json(test_router(), &format!("/?urls={urls}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"error": "too many urls in request, should be 10 or less"})
        );
    }

    #[tokio::test]
    async fn test_fatal_pipeline_failure_answers_500_body() {
        use crate::extractors::{Extract, ExtractorRegistry};
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        struct PanickingExtractor;

        impl Extract for PanickingExtractor {
            fn extract(&self, _html: &str) -> String {
                panic!("extractor crashed")
            }
        }

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let host = server.address().ip().to_string();
        let mut registry = ExtractorRegistry::new();
        registry.register(
            crate::extractors::site_key(&host),
            Arc::new(PanickingExtractor),
        );
        let charged: HashSet<String> = ["шок".to_string()].into_iter().collect();
        let pipeline =
            Pipeline::with_registry(registry, charged, DEFAULT_FETCH_DEADLINE).unwrap();

        let uri = format!("/?urls={}/article", server.uri());
        let (status, body) = get_json(router(Arc::new(pipeline)), &uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "article processing failed"}));
    }

    #[tokio::test]
    async fn test_unfetchable_url_still_yields_full_array() {
        // Connection refused locally: classified FETCH_ERROR, never dropped.
        let (status, body) =
            get_json(test_router(), "/?urls=http://127.0.0.1:9/none").await;
        assert_eq!(status, StatusCode::OK);
        let results: Vec<crate::models::ProcessingResult> =
            serde_json::from_value(body).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, Status::FetchError);
    }
}
