//! Detection Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use registry::error::RegistryError;
use thiserror::Error;

/// Detection-specific result type alias
pub type DetectionResult<T> = Result<T, DetectionError>;

/// Detection-specific error variants
#[derive(Debug, Error)]
pub enum DetectionError {
    /// The multipart upload carried no image field
    #[error("No image file provided")]
    MissingImage,

    /// The uploaded file is not an image MIME type
    #[error("Only image files are allowed")]
    NotAnImage,

    /// Multipart payload could not be read
    #[error("Invalid upload: {0}")]
    Upload(String),

    /// The external prediction service failed. Never surfaces to the
    /// client; the gateway swallows it and falls back.
    #[error("Prediction service error: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The prediction service answered with an empty prediction list
    #[error("Prediction service returned no predictions")]
    EmptyPrediction,

    /// Error from the record store
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DetectionError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DetectionError::MissingImage
            | DetectionError::NotAnImage
            | DetectionError::Upload(_) => StatusCode::BAD_REQUEST,
            DetectionError::Registry(e) => e.status_code(),
            DetectionError::Upstream(_)
            | DetectionError::EmptyPrediction
            | DetectionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DetectionError::MissingImage
            | DetectionError::NotAnImage
            | DetectionError::Upload(_) => ErrorKind::BadRequest,
            DetectionError::Registry(e) => e.kind(),
            DetectionError::Upstream(_)
            | DetectionError::EmptyPrediction
            | DetectionError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            DetectionError::Internal(msg) => {
                tracing::error!(message = %msg, "Detection internal error");
            }
            DetectionError::Upstream(e) => {
                tracing::warn!(error = %e, "Prediction service error");
            }
            _ => {
                tracing::debug!(error = %self, "Detection error");
            }
        }
    }
}

impl IntoResponse for DetectionError {
    fn into_response(self) -> Response {
        match self {
            DetectionError::Registry(e) => e.into_response(),
            other => {
                other.log();
                other.to_app_error().into_response()
            }
        }
    }
}
