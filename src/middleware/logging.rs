//! Logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

/// Request logging middleware.
///
/// Logs one line per request with method, path, status and latency.
/// Server errors and client errors other than plain 404s are logged at
/// warn level so they stand out in the default filter.
pub async fn request_logging(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

    if status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms = format!("{latency_ms:.2}"),
            "request failed"
        );
    } else if status.is_client_error() && status != StatusCode::NOT_FOUND {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms = format!("{latency_ms:.2}"),
            "request rejected"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms = format!("{latency_ms:.2}"),
            "request completed"
        );
    }

    response
}
