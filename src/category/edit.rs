//! Category update endpoint.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    category::{CategoryForm, CategoryPath, CategoryService, CategoryStore},
    storage::BlobStore,
};

/// Rename a category and optionally replace its image.
pub async fn update_category_endpoint<C, B>(
    State(service): State<CategoryService<C, B>>,
    CategoryPath(category_id): CategoryPath,
    form: CategoryForm,
) -> Result<Response, Error>
where
    C: CategoryStore + Clone + Send + Sync + 'static,
    B: BlobStore + Clone + Send + Sync + 'static,
{
    Ok(service.update(category_id, form)?.into_response())
}
