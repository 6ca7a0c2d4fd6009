//! Error types shared across layers.
//!
//! - [`StoreError`] - persistence failures reported by repositories
//! - [`GenerationError`] - short code generation failures
//! - [`AppError`] - request-level errors mapped to HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure reported by a [`crate::domain::repositories::UrlRepository`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record matches the requested short code.
    #[error("no url stored for code '{code}'")]
    NotFound { code: String },

    /// Another record already holds the short code.
    #[error("short code '{code}' is already taken")]
    Duplicate { code: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store could not be reached (used by non-SQL backends).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    pub fn duplicate(code: impl Into<String>) -> Self {
        Self::Duplicate { code: code.into() }
    }

    /// Returns true if the store rejected a duplicate short code.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            StoreError::Duplicate { .. } => true,
            StoreError::Database(e) => e
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation()),
            _ => false,
        }
    }
}

/// Failure of [`crate::application::services::CodeGenerator::generate`].
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Every attempt collided with an existing code.
    #[error("failed to generate unique code after {attempts} attempts")]
    Exhausted { attempts: usize },

    /// The existence check itself failed; no further attempts were made.
    #[error("failed to check code existence: {0}")]
    Store(#[source] StoreError),
}

/// Request-level error returned by services and handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// User-correctable input problem (400).
    #[error("{0}")]
    Validation(String),

    /// Lookup miss (404).
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Store(StoreError),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Generation(_) | AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the end user.
    ///
    /// Internal failures are reduced to a generic hint; the details only go to the log.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(message) | AppError::NotFound(message) => message.clone(),
            AppError::Generation(_) => {
                "Could not generate a short code. Please try again.".to_string()
            }
            AppError::Store(_) => "Could not save your URL. Please try again.".to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => AppError::not_found("URL not found"),
            other => AppError::Store(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, self.user_message()).into_response()
    }
}
