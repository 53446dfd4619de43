//! Book Error Types
//!
//! Book-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Every handler returns [`BookResult`]
//! and the HTTP mapping happens once, in `IntoResponse`.

use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::Display;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::validation::ValidationError;

/// Book-specific result type alias
pub type BookResult<T> = Result<T, BookError>;

/// Store operation that failed, used to prefix 500 messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BookOperation {
    #[display("Error retrieving books")]
    List,
    #[display("Error retrieving book")]
    Get,
    #[display("Error creating book")]
    Create,
    #[display("Error updating book")]
    Update,
    #[display("Error deleting book")]
    Delete,
}

impl BookOperation {
    /// Adapter for `map_err` that tags a database error with this operation
    pub fn db_error(self) -> impl FnOnce(sqlx::Error) -> BookError {
        move |source| BookError::Database {
            operation: self,
            source,
        }
    }
}

/// Book-specific error variants
#[derive(Debug, Error)]
pub enum BookError {
    /// Unknown id (or an id segment that is not a valid integer)
    #[error("Book not found")]
    NotFound,

    /// No body, no JSON content type, or a falsy JSON value
    #[error("No JSON data provided")]
    MissingPayload,

    /// Body could not be read or parsed as JSON
    #[error("Invalid JSON payload")]
    InvalidJson,

    /// Body exceeded the request body limit
    #[error("Request body too large")]
    PayloadTooLarge,

    /// Payload failed field validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Store failure; the transaction (if any) was rolled back
    #[error("{operation}: {source}")]
    Database {
        operation: BookOperation,
        #[source]
        source: sqlx::Error,
    },
}

impl BookError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookError::NotFound => StatusCode::NOT_FOUND,
            BookError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            BookError::MissingPayload | BookError::InvalidJson | BookError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            BookError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookError::NotFound => ErrorKind::NotFound,
            BookError::PayloadTooLarge => ErrorKind::PayloadTooLarge,
            BookError::MissingPayload | BookError::InvalidJson | BookError::Validation(_) => {
                ErrorKind::BadRequest
            }
            BookError::Database { .. } => ErrorKind::InternalServerError,
        }
    }

    /// Re-tag a store error with the operation the caller was performing
    pub fn during(self, operation: BookOperation) -> Self {
        match self {
            BookError::Database { source, .. } => BookError::Database { operation, source },
            other => other,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BookError::Database { operation, source } => {
                tracing::error!(error = %source, operation = %operation, "Book store error");
            }
            _ => {
                tracing::debug!(error = %self, "Book request rejected");
            }
        }
    }
}

impl From<BookError> for AppError {
    fn from(err: BookError) -> Self {
        let app_err = AppError::new(err.kind(), err.to_string());
        match err {
            BookError::Database { source, .. } => app_err.with_source(source),
            _ => app_err,
        }
    }
}

impl IntoResponse for BookError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

impl From<PathRejection> for BookError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Unparseable book id");
        BookError::NotFound
    }
}
