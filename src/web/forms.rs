//! Form bodies and path parameter parsing for the page handlers.

use serde::Deserialize;

use crate::error::AppError;

/// Value of `_method` that turns a member `POST` into a delete.
pub const DELETE_OVERRIDE: &str = "delete";

/// Creation form shared by lists and items.
///
/// A missing `title` field is read as the empty string.
#[derive(Debug, Default, Deserialize)]
pub struct TitleForm {
    #[serde(default)]
    pub title: String,
}

/// Hidden-field method override submitted by delete buttons.
///
/// Plain HTML forms can only send `GET` and `POST`, so delete forms post
/// `_method=delete`. Only that exact value is honored.
#[derive(Debug, Default, Deserialize)]
pub struct MethodOverrideForm {
    #[serde(default, rename = "_method")]
    pub method: String,
}

impl MethodOverrideForm {
    /// True when the form asks for a delete.
    pub fn is_delete(&self) -> bool {
        self.method == DELETE_OVERRIDE
    }
}

/// Parses a path segment as a store id.
///
/// Ids are positive integers; anything else yields [`AppError::Validation`]
/// carrying `message`.
pub fn parse_id(raw: &str, message: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request(message)),
    }
}
