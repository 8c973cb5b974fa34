//! Links Error Types
//!
//! This module provides catalog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Links-specific result type alias
pub type LinksResult<T> = Result<T, LinksError>;

/// Links-specific error variants
#[derive(Debug, Error)]
pub enum LinksError {
    /// Input failed validation (malformed URL, missing title, ...)
    #[error("{0}")]
    Validation(String),

    /// URL already exists in the catalog
    #[error("URL already submitted")]
    DuplicateUrl,

    /// Normalized tag name already exists
    #[error("Tag already exists")]
    DuplicateTag,

    /// No or invalid credential
    #[error("Authentication required")]
    Unauthorized,

    /// Authenticated but the role does not allow the operation
    #[error("{0}")]
    Forbidden(String),

    /// Referenced link does not exist
    #[error("URL not found")]
    LinkNotFound,

    /// Referenced tag does not exist
    #[error("Tag not found")]
    TagNotFound,

    /// Approve/reject attempted on an already-resolved link
    #[error("URL is not pending")]
    NotPending,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LinksError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            LinksError::Validation(_) => StatusCode::BAD_REQUEST,
            LinksError::DuplicateUrl | LinksError::DuplicateTag | LinksError::NotPending => {
                StatusCode::CONFLICT
            }
            LinksError::Unauthorized => StatusCode::UNAUTHORIZED,
            LinksError::Forbidden(_) => StatusCode::FORBIDDEN,
            LinksError::LinkNotFound | LinksError::TagNotFound => StatusCode::NOT_FOUND,
            LinksError::Database(_) | LinksError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinksError::Validation(_) => ErrorKind::BadRequest,
            LinksError::DuplicateUrl | LinksError::DuplicateTag | LinksError::NotPending => {
                ErrorKind::Conflict
            }
            LinksError::Unauthorized => ErrorKind::Unauthorized,
            LinksError::Forbidden(_) => ErrorKind::Forbidden,
            LinksError::LinkNotFound | LinksError::TagNotFound => ErrorKind::NotFound,
            LinksError::Database(_) | LinksError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            LinksError::Database(e) => {
                tracing::error!(error = %e, "Links database error");
            }
            LinksError::Internal(msg) => {
                tracing::error!(message = %msg, "Links internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Links error");
            }
        }
    }
}

impl IntoResponse for LinksError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for LinksError {
    fn from(err: AppError) -> Self {
        if err.kind() == ErrorKind::BadRequest {
            LinksError::Validation(err.message().to_string())
        } else {
            LinksError::Internal(err.to_string())
        }
    }
}
