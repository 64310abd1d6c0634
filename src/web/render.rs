//! Response helpers shared by the page handlers.
//!
//! Error statuses (400/404/405/500) come from [`crate::error::AppError`];
//! this module covers the two success shapes, a rendered page and a redirect.

use askama::Template;
use axum::response::{Html, Redirect};

use crate::error::AppError;

/// Renders `template` into an HTML response.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the template fails to render. The
/// failure only affects the current request.
pub fn page<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

/// `303 See Other` to `url`.
pub fn redirect(url: &str) -> Redirect {
    Redirect::to(url)
}
