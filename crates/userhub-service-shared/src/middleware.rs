//! Request-tracking middleware.
//!
//! Extracts or generates a correlation id for each request and wraps the
//! rest of the pipeline in a tracing span carrying it, so every log line
//! produced while handling a request (including the error boundary's) can be
//! correlated. Incoming `X-Request-ID` headers are honored; otherwise a
//! UUID v7 (time-sortable) is generated.

use std::time::Instant;

use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Newtype wrapper for request correlation ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new UUID v7 request id.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Extract the `X-Request-ID` header (case-insensitive) or generate a fresh
/// id when it is absent, empty, or not valid UTF-8.
pub fn extract_or_generate_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(RequestId::from)
        .unwrap_or_else(RequestId::generate)
}

/// Strip the query string from a path for log labels.
pub fn normalize_path(path: &str) -> &str {
    path.split('?').next().unwrap_or(path)
}

/// Middleware: wrap the request in a span and log its completion.
///
/// Install with `axum::middleware::from_fn(track_requests)`.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = normalize_path(request.uri().path()).to_string();
    let request_id = extract_or_generate_request_id(request.headers());

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );

    async move {
        tracing::info!("handling request");
        let response = next.run(request).await;
        tracing::info!(
            status = response.status().as_u16(),
            latency_ms = start.elapsed().as_secs_f64() * 1000.0,
            "request completed"
        );
        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn generated_ids_are_unique_uuids() {
        let a = RequestId::generate();
        let b = RequestId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn header_id_is_used_when_present() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", HeaderValue::from_static("req-123"));
        assert_eq!(extract_or_generate_request_id(&headers).as_str(), "req-123");
    }

    #[test]
    fn empty_header_id_is_replaced() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", HeaderValue::from_static(""));
        assert_eq!(extract_or_generate_request_id(&headers).as_str().len(), 36);
    }

    #[test]
    fn missing_header_generates() {
        assert_eq!(
            extract_or_generate_request_id(&HeaderMap::new()).as_str().len(),
            36
        );
    }

    #[test]
    fn normalize_strips_query() {
        assert_eq!(normalize_path("/api/auth.login?x=1"), "/api/auth.login");
        assert_eq!(normalize_path("/api/auth.login"), "/api/auth.login");
        assert_eq!(normalize_path("/"), "/");
    }
}
