//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/admin/categories/{category_id}',
//! use [format_endpoint].

/// The route for listing and creating categories.
pub const CATEGORIES: &str = "/api/admin/categories";
/// The route for showing, updating and deleting a single category.
pub const CATEGORY: &str = "/api/admin/categories/{category_id}";
/// The route that stored images are served from.
pub const STORAGE: &str = "/storage";

/// Replace the first `{parameter}` in `endpoint_path` with `id`.
///
/// If no parameter is found in `endpoint_path`, the original path is returned.
/// An unclosed parameter runs to the end of the path.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |offset| param_start + offset + 1);

    format!(
        "{}{id}{}",
        &endpoint_path[..param_start],
        &endpoint_path[param_end..]
    )
}
