//! Application error type and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`; this is the single place where
//! an error kind is turned into a status code. Responses are plain text, the
//! same shape a browser gets for any other non-HTML failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing path parameter, or an undecodable form body.
    #[error("{message}")]
    Validation { message: String },

    /// List or item absent, or an item addressed under the wrong list.
    #[error("{message}")]
    NotFound { message: String },

    /// Verb or `_method` override not supported by the route.
    #[error("{message}")]
    MethodNotAllowed { message: String },

    /// Storage or rendering failure.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Status code this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::MethodNotAllowed { message }
            | AppError::Internal { message } => message,
        };

        (status, format!("{message}\n")).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error")
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        tracing::error!(error = %e, "Template rendering failed");
        AppError::internal("Template rendering failed")
    }
}
