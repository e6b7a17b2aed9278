//! Category listing endpoint.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    Error,
    category::{CategoryService, CategoryStore, service::ListCategories},
    storage::BlobStore,
};

/// The query string for the category listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Text to look for in category names.
    pub q: Option<String>,
    /// The 1-based page number. Anything that is not a positive integer means the first page.
    pub page: Option<String>,
}

/// Get one page of categories, newest first, optionally filtered with `?q=`.
pub async fn list_categories_endpoint<C, B>(
    State(service): State<CategoryService<C, B>>,
    Query(params): Query<ListParams>,
) -> Result<Response, Error>
where
    C: CategoryStore + Clone + Send + Sync + 'static,
    B: BlobStore + Clone + Send + Sync + 'static,
{
    let page = service
        .pagination_config()
        .resolve_page(params.page.as_deref());

    let response = service.list(ListCategories {
        search: params.q,
        page,
    })?;

    Ok(Json(response).into_response())
}
