//! Responses for requests no route accepts.

use crate::error::AppError;

/// Method fallback for every defined route.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::method_not_allowed("Invalid request method")
}

/// Router fallback for unknown paths.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("404 page not found")
}
