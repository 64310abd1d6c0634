//! Root path handler.

use axum::response::Redirect;

use crate::web::render;

/// Sends the browser to the list collection.
///
/// # Endpoint
///
/// `GET /` (query string ignored)
pub async fn root_handler() -> Redirect {
    render::redirect("/lists")
}
