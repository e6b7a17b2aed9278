//! Category detail endpoint.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    category::{CategoryPath, CategoryService, CategoryStore},
    storage::BlobStore,
};

/// Get a single category. A missing category is reported in the envelope with `200 OK`.
pub async fn get_category_endpoint<C, B>(
    State(service): State<CategoryService<C, B>>,
    CategoryPath(category_id): CategoryPath,
) -> Result<Response, Error>
where
    C: CategoryStore + Clone + Send + Sync + 'static,
    B: BlobStore + Clone + Send + Sync + 'static,
{
    Ok(service.get(category_id)?.into_response())
}
