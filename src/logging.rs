//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes, to_bytes},
    extract::Request,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE, request, response},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{ApiResponse, routing::MAX_REQUEST_BODY_BYTES};

/// The number of bytes of a body that are logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
/// Request bodies are read up to [MAX_REQUEST_BODY_BYTES]. Multipart requests and
/// non-JSON responses, such as stored images, are streamed through untouched and
/// only their headers are logged.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();

    let request = if is_multipart(&parts.headers) {
        tracing::info!(
            "Received request: {parts:#?}\nbody: <multipart form, {} bytes>",
            content_length(&parts.headers).unwrap_or("unknown")
        );
        Request::from_parts(parts, body)
    } else {
        let body = match to_bytes(body, MAX_REQUEST_BODY_BYTES).await {
            Ok(body) => body,
            Err(error) => {
                tracing::warn!("Could not read request body: {error}");
                return (
                    StatusCode::BAD_REQUEST,
                    ApiResponse::<()>::failure("Could not read request body"),
                )
                    .into_response();
            }
        };

        log_request(&parts, &body);
        Request::from_parts(parts, Body::from(body))
    };

    let response = next.run(request).await;

    if !is_json(response.headers()) {
        tracing::info!("Sending response: {:#?}\nbody: <not logged>", response.headers());
        return response;
    }

    let (parts, body) = response.into_parts();
    let body = match to_bytes(body, usize::MAX).await {
        Ok(body) => body,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    log_response(&parts, &body);

    Response::from_parts(parts, Body::from(body))
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/"))
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

fn content_length(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("content-length")
        .and_then(|value| value.to_str().ok())
}

/// The first [LOG_BODY_LENGTH_LIMIT] bytes of `body` as text, and whether it was cut short.
fn truncate_body(body: &str) -> (&str, bool) {
    if body.len() <= LOG_BODY_LENGTH_LIMIT {
        return (body, false);
    }

    let mut end = LOG_BODY_LENGTH_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    (&body[..end], true)
}

fn log_request(parts: &request::Parts, body: &Bytes) {
    let body = String::from_utf8_lossy(body);

    match truncate_body(&body) {
        (head, true) => {
            tracing::info!("Received request: {parts:#?}\nbody: {head}...");
            tracing::debug!("Full request body: {body:?}");
        }
        (body, false) => tracing::info!("Received request: {parts:#?}\nbody: {body:?}"),
    }
}

fn log_response(parts: &response::Parts, body: &Bytes) {
    let body = String::from_utf8_lossy(body);

    match truncate_body(&body) {
        (head, true) => {
            tracing::info!("Sending response: {parts:#?}\nbody: {head}...");
            tracing::debug!("Full response body: {body:?}");
        }
        (body, false) => tracing::info!("Sending response: {parts:#?}\nbody: {body:?}"),
    }
}
