//! Top-level router combining page routes and middleware.
//!
//! # Route Structure
//!
//! - `GET /`         - Redirect to `/lists`
//! - `/lists/*`      - List and item pages (see [`crate::web::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Request body logging** - Debug-level method, URI and body (opt-in)
//! - **Timeout** - Transport-level per-request limit
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use crate::web::middleware::{request_log, trace};
use axum::{Router, http::StatusCode, middleware};
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `log_request_bodies` - when `true`, every request is logged at debug
///   level together with its body
/// - `request_timeout` - requests running longer are answered with
///   `408 Request Timeout`
pub fn app_router(
    state: AppState,
    log_request_bodies: bool,
    request_timeout: Duration,
) -> NormalizePath<Router> {
    let mut router = web::routes::routes()
        .fallback(not_found_handler)
        .with_state(state);

    if log_request_bodies {
        router = router.layer(middleware::from_fn(request_log::layer));
    }

    let router = router
        .layer(timeout_layer(request_timeout))
        .layer(trace::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Answers `408 Request Timeout` once `timeout` has elapsed.
pub fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use tower::ServiceExt;

    async fn slow() -> &'static str {
        tokio::time::sleep(Duration::from_secs(5)).await;
        "done"
    }

    #[tokio::test]
    async fn test_slow_request_times_out() {
        let app = Router::new()
            .route("/slow", get(slow))
            .layer(timeout_layer(Duration::from_millis(20)));

        let response = app
            .oneshot(Request::get("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }
}
