//! API middleware

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use core_kernel::RequestId;
use std::time::Instant;
use tracing::{info, warn};

/// Header carrying the request id back to the caller
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request logging middleware
///
/// Assigns each request a [`RequestId`], logs method, uri, status and duration
/// once the response is ready, and echoes the id in `x-request-id`.
pub async fn request_logging(mut request: Request<Body>, next: Next) -> Response {
    let request_id = RequestId::new_v7();
    let method = request.method().clone();
    let uri = request.uri().clone();
    request.extensions_mut().insert(request_id);

    let start = Instant::now();
    let mut response = next.run(request).await;
    let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    let status = response.status();

    if status.is_server_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            duration_ms,
            "API request failed"
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            duration_ms,
            "API request"
        );
    }

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
