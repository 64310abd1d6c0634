//! Verbose request logging enabled with `LOG_LEVEL=debug`.

use axum::{
    body::{self, Body},
    extract::Request,
    middleware::Next,
    response::Response,
};

use crate::error::AppError;

/// Largest body buffered for logging; matches axum's default body limit.
pub const MAX_LOGGED_BODY: usize = 2 * 1024 * 1024;

/// Tracing target of the body log lines.
pub const TARGET: &str = module_path!();

/// Logs method, URI and request body at `DEBUG`, then replays the body.
///
/// ```text
/// DEBUG POST /lists/3/items | Request body: title=Tetris
/// DEBUG GET /lists
/// ```
///
/// # Errors
///
/// Returns 400 if the body cannot be read or exceeds [`MAX_LOGGED_BODY`].
pub async fn layer(req: Request, next: Next) -> Result<Response, AppError> {
    let (parts, body) = req.into_parts();

    let bytes = body::to_bytes(body, MAX_LOGGED_BODY).await.map_err(|e| {
        tracing::warn!(error = %e, "Error reading request body");
        AppError::bad_request("Error reading request body")
    })?;

    if bytes.is_empty() {
        tracing::debug!("{} {}", parts.method, parts.uri);
    } else {
        tracing::debug!(
            "{} {} | Request body: {}",
            parts.method,
            parts.uri,
            String::from_utf8_lossy(&bytes)
        );
    }

    let req = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(req).await)
}
