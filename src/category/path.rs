//! The category id in a request path.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::{Error, category::CategoryId};

/// The `{category_id}` segment of a category route.
///
/// An id that is not an integer is rejected with [Error::InvalidCategoryId].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPath(pub CategoryId);

impl<S> FromRequestParts<S> for CategoryPath
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(category_id) = Path::<CategoryId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| Error::InvalidCategoryId(rejection.body_text()))?;

        Ok(Self(category_id))
    }
}

#[cfg(test)]
mod category_path_tests {
    use axum::{Router, http::StatusCode, routing::get};
    use axum_test::TestServer;
    use serde_json::Value;

    use super::CategoryPath;

    async fn echo_id(CategoryPath(category_id): CategoryPath) -> String {
        category_id.to_string()
    }

    fn get_test_server() -> TestServer {
        let app = Router::new().route("/categories/{category_id}", get(echo_id));

        TestServer::new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn extracts_numeric_id() {
        let server = get_test_server();

        let response = server.get("/categories/42").await;

        response.assert_status_ok();
        response.assert_text("42");
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected_with_envelope() {
        let server = get_test_server();

        let response = server.get("/categories/abc").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["data"], Value::Null);
        assert!(body["message"].as_str().is_some_and(|message| !message.is_empty()));
    }
}
