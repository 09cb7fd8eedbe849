/// Static pages
///
/// # Endpoints
///
/// - `GET /` - Landing page
/// - any unmatched path - plain-text 404

use crate::{error::ApiError, views};
use axum::{http::Uri, response::Html};

/// Landing page handler
pub async fn index() -> Html<String> {
    views::index_page()
}

/// Router fallback for paths that match no route
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}
