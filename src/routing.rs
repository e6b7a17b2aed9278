//! Application router configuration.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    AppState, Error,
    category::{
        CategoryStore, create_category_endpoint, delete_category_endpoint, get_category_endpoint,
        list_categories_endpoint, update_category_endpoint,
    },
    endpoints,
    storage::BlobStore,
};

/// The largest request body the router accepts, 10 MiB.
///
/// This is well above the image size limit so that oversized images are
/// rejected with a validation error rather than a bare `413`.
pub const MAX_REQUEST_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Return a router with all the app's routes.
pub fn build_router<C, B>(state: AppState<C, B>) -> Router
where
    C: CategoryStore + Clone + Send + Sync + 'static,
    B: BlobStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            endpoints::CATEGORIES,
            get(list_categories_endpoint::<C, B>).post(create_category_endpoint::<C, B>),
        )
        .route(
            endpoints::CATEGORY,
            get(get_category_endpoint::<C, B>)
                .put(update_category_endpoint::<C, B>)
                .patch(update_category_endpoint::<C, B>)
                .delete(delete_category_endpoint::<C, B>),
        )
        .fallback(get_404_not_found)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .with_state(state)
}

async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}
