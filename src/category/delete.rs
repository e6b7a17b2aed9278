//! Category deletion endpoint.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    category::{CategoryPath, CategoryService, CategoryStore},
    storage::BlobStore,
};

/// Delete a category and its image.
pub async fn delete_category_endpoint<C, B>(
    State(service): State<CategoryService<C, B>>,
    CategoryPath(category_id): CategoryPath,
) -> Result<Response, Error>
where
    C: CategoryStore + Clone + Send + Sync + 'static,
    B: BlobStore + Clone + Send + Sync + 'static,
{
    Ok(service.delete(category_id)?.into_response())
}
