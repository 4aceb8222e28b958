//! Registry Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Registry-specific result type alias
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry-specific error variants
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Required fields missing from a create request
    #[error("Missing required fields")]
    MissingFields,

    /// A field value failed validation
    #[error("{0}")]
    Validation(String),

    /// tagId collides with an existing animal
    #[error("Duplicate tagId")]
    DuplicateTagId,

    /// No animal with that id is owned by the caller. Deliberately
    /// covers both "does not exist" and "owned by someone else".
    #[error("Animal not found or not owned by user")]
    AnimalNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RegistryError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::MissingFields | RegistryError::Validation(_) => StatusCode::BAD_REQUEST,
            RegistryError::DuplicateTagId => StatusCode::CONFLICT,
            RegistryError::AnimalNotFound => StatusCode::NOT_FOUND,
            RegistryError::Database(_) | RegistryError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::MissingFields | RegistryError::Validation(_) => ErrorKind::BadRequest,
            RegistryError::DuplicateTagId => ErrorKind::Conflict,
            RegistryError::AnimalNotFound => ErrorKind::NotFound,
            RegistryError::Database(_) | RegistryError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            RegistryError::Database(e) => {
                tracing::error!(error = %e, "Registry database error");
            }
            RegistryError::Internal(msg) => {
                tracing::error!(message = %msg, "Registry internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Registry error");
            }
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
