//! Category admin is the category management API of a school information
//! backend.
//!
//! This library provides a JSON REST API for listing, creating, viewing,
//! updating and deleting categories, each with an optional image that is kept
//! in a blob store.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod category;
mod db;
mod endpoints;
mod logging;
mod pagination;
mod response;
mod routing;
mod storage;
mod upload;
mod validation;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use category::{
    CATEGORY_IMAGE_COLLECTION, Category, CategoryChanges, CategoryForm, CategoryId, CategoryName,
    CategoryPath, CategoryQuery, CategoryService, CategoryStore, ImageChange, ListCategories,
    MAX_IMAGE_BYTES, NewCategory, SQLiteCategoryStore, slugify,
};
pub use db::initialize as initialize_db;
pub use endpoints::{CATEGORIES, CATEGORY, STORAGE, format_endpoint};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use pagination::{Page, PaginationConfig};
pub use response::ApiResponse;
pub use routing::{MAX_REQUEST_BODY_BYTES, build_router};
pub use storage::{BlobStore, FileSystemBlobStore};
pub use upload::UploadedFile;
pub use validation::ValidationErrors;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request failed validation.
    ///
    /// The field errors are sent to the client as is, so the messages should
    /// be written for the person filling in the form.
    #[error("the request failed validation: {0:?}")]
    Validation(ValidationErrors),

    /// An empty string was used to create a category name.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// The category name is already used by another category.
    ///
    /// Validation checks for duplicate names before writing, so this usually
    /// means another request took the name in the meantime.
    #[error("the category name is already taken")]
    DuplicateCategoryName,

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update a category that does not exist
    #[error("tried to update a category that is not in the database")]
    UpdateMissingCategory,

    /// Tried to delete a category that does not exist
    #[error("tried to delete a category that is not in the database")]
    DeleteMissingCategory,

    /// The category id in the request path is not an integer.
    #[error("Invalid category id: {0}")]
    InvalidCategoryId(String),

    /// The multipart or form body could not be parsed.
    #[error("Could not parse the request body: {0}")]
    MultipartError(String),

    /// A blob name did not contain a usable file name, e.g. `""` or `".."`.
    #[error("\"{0}\" is not a valid blob name")]
    InvalidBlobName(String),

    /// The blob store could not read or write a file.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("blob storage failed: {0}")]
    BlobStorage(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.ends_with("category.name") =>
            {
                Error::DuplicateCategoryName
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::BlobStorage(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
            }
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                ApiResponse::<()>::failure("Not Found"),
            )
                .into_response(),
            Error::InvalidCategoryId(message) => {
                tracing::debug!("Rejected request path: {message}");
                (StatusCode::BAD_REQUEST, ApiResponse::<()>::failure(message)).into_response()
            }
            Error::MultipartError(message) => {
                tracing::debug!("Rejected request body: {message}");
                (StatusCode::BAD_REQUEST, ApiResponse::<()>::failure(message)).into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::failure(
                        "An unexpected error occurred, check the server logs for more details.",
                    ),
                )
                    .into_response()
            }
        }
    }
}
