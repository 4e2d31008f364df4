//! # HTTP Request Tracing Middleware
//!
//! Axum middleware that wraps each request in a `http_request` span and
//! records request count and latency metrics.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;

use super::metrics;

/// Axum middleware that traces and measures every HTTP request
pub async fn trace_http_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let uri = request.uri().path().to_string();
    let start = Instant::now();

    let span = crate::request_span!(method, uri, status_code = tracing::field::Empty);
    let response = next.run(request).instrument(span.clone()).await;

    let status_code = response.status().as_u16();
    let elapsed = start.elapsed();
    span.record("status_code", status_code);

    span.in_scope(|| {
        if status_code >= 500 {
            tracing::warn!(status_code, elapsed_ms = elapsed.as_millis() as u64, "Request failed");
        } else {
            tracing::info!(status_code, elapsed_ms = elapsed.as_millis() as u64, "Request completed");
        }
    });

    metrics::record_http_request(
        &method,
        &normalize_path_for_metrics(&uri),
        status_code,
        elapsed.as_secs_f64(),
    )
    .await;

    response
}

/// Normalize path for metrics to avoid high cardinality
///
/// UUID and numeric segments are replaced with `:id`; a trailing slash is
/// dropped so `/summary` and `/summary/` share a series.
fn normalize_path_for_metrics(path: &str) -> String {
    let trimmed = if path.len() > 1 { path.trim_end_matches('/') } else { path };

    trimmed
        .split('/')
        .map(|segment| {
            let is_uuid =
                segment.len() == 36 && segment.chars().all(|c| c.is_ascii_hexdigit() || c == '-');
            let is_numeric = !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit());
            if is_uuid || is_numeric {
                ":id"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, routing::get, Router};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn test_handler() -> &'static str {
        "OK"
    }

    #[tokio::test]
    async fn test_trace_middleware_passes_response_through() {
        let app = Router::new()
            .route("/test", get(test_handler))
            .layer(axum::middleware::from_fn(trace_http_requests));

        let request = Request::builder().uri("/test").method("GET").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_normalize_path_for_metrics_basic() {
        assert_eq!(normalize_path_for_metrics("/api/v1/health"), "/api/v1/health");
        assert_eq!(normalize_path_for_metrics("/api/v1/summary/health"), "/api/v1/summary/health");
        assert_eq!(normalize_path_for_metrics("/"), "/");
    }

    #[test]
    fn test_normalize_path_for_metrics_trailing_slash() {
        assert_eq!(normalize_path_for_metrics("/api/v1/summary/"), "/api/v1/summary");
    }

    #[test]
    fn test_normalize_path_for_metrics_ids() {
        assert_eq!(
            normalize_path_for_metrics("/api/v1/summary/550e8400-e29b-41d4-a716-446655440000"),
            "/api/v1/summary/:id"
        );
        assert_eq!(normalize_path_for_metrics("/api/v1/summary/12345"), "/api/v1/summary/:id");
    }
}
