//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    create_item_handler, create_list_handler, item_handler, items_handler, list_handler,
    lists_handler, method_not_allowed_handler, root_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// All page routes.
///
/// # Endpoints
///
/// - `GET  /`                          - Redirect to `/lists`
/// - `GET  /lists`                     - List collection page
/// - `POST /lists`                     - Create a list
/// - `POST /lists/{id}`                - Delete a list (`_method=delete`)
/// - `GET  /lists/{list_id}/items`     - Item collection page
/// - `POST /lists/{list_id}/items`     - Create an item
/// - `POST /lists/{list_id}/items/{id}` - Delete an item (`_method=delete`)
///
/// Any other method on these paths answers `405 Method Not Allowed`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler).fallback(method_not_allowed_handler))
        .route(
            "/lists",
            get(lists_handler)
                .post(create_list_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/lists/{id}",
            post(list_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/lists/{list_id}/items",
            get(items_handler)
                .post(create_item_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/lists/{list_id}/items/{id}",
            post(item_handler).fallback(method_not_allowed_handler),
        )
}
