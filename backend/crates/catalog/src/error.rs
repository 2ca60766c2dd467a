//! Catalog Error Types
//!
//! This module provides catalog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with the given (well-formed) id
    #[error("Product not found")]
    ProductNotFound,

    /// Path or body parameter is not a well-formed object id.
    /// Detected before any storage call.
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// BSON mapping error
    #[error("Document mapping error: {0}")]
    Mapping(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::ProductNotFound => StatusCode::NOT_FOUND,
            CatalogError::InvalidId(_) => StatusCode::BAD_REQUEST,
            CatalogError::Database(_)
            | CatalogError::Mapping(_)
            | CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::ProductNotFound => ErrorKind::NotFound,
            CatalogError::InvalidId(_) => ErrorKind::BadRequest,
            CatalogError::Database(_)
            | CatalogError::Mapping(_)
            | CatalogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Mapping(msg) | CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<bson::ser::Error> for CatalogError {
    fn from(err: bson::ser::Error) -> Self {
        CatalogError::Mapping(err.to_string())
    }
}

impl From<bson::de::Error> for CatalogError {
    fn from(err: bson::de::Error) -> Self {
        CatalogError::Mapping(err.to_string())
    }
}
