use axum::{
    body::{Body, to_bytes},
    response::Response,
};
use serde_json::Value;

/// Read the whole body of `response` and parse it as JSON.
pub(crate) async fn parse_json_body(response: Response<Body>) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not read response body");

    serde_json::from_slice(&body).unwrap_or_else(|error| {
        panic!(
            "Response body is not valid JSON ({error}): {}",
            String::from_utf8_lossy(&body)
        )
    })
}
