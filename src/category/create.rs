//! Category creation endpoint.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    category::{CategoryForm, CategoryService, CategoryStore},
    storage::BlobStore,
};

/// Create a category from a form, optionally with an image.
///
/// Responds with `201 Created` when the category was saved.
pub async fn create_category_endpoint<C, B>(
    State(service): State<CategoryService<C, B>>,
    form: CategoryForm,
) -> Result<Response, Error>
where
    C: CategoryStore + Clone + Send + Sync + 'static,
    B: BlobStore + Clone + Send + Sync + 'static,
{
    let response = service.create(form)?;

    if response.success {
        Ok((StatusCode::CREATED, response).into_response())
    } else {
        Ok(response.into_response())
    }
}
