//! The uniform JSON envelope that wraps every business outcome.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// A response body of the form `{"success": bool, "message": string, "data": ...}`.
///
/// Expected outcomes such as "not found" or "could not save" are reported
/// with `success: false` and a `200 OK` status so that clients can handle
/// every envelope the same way. Validation failures do not use the envelope,
/// see [crate::Error::Validation].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation had the intended effect.
    pub success: bool,
    /// A short human readable description of the outcome.
    pub message: String,
    /// The payload, `null` for failures and operations without a result.
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// A successful outcome carrying `data`.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// A successful outcome without a payload.
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    /// A failed outcome.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
