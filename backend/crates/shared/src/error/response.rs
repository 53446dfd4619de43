//! Error response body
//!
//! Every error leaves the service as `{"error": "<message>"}`.

use serde::{Deserialize, Serialize};

use super::app_error::AppError;

/// JSON body of an error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self::new(err.message())
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(ErrorBody::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_shape() {
        let body = ErrorBody::new("Book not found");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Book not found" }));
    }

    #[test]
    fn test_from_app_error_uses_message_only() {
        let err = AppError::bad_request("Missing required field: title");
        let body = ErrorBody::from(&err);
        assert_eq!(body.error, "Missing required field: title");
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_into_response() {
        use axum::response::IntoResponse;

        let response = AppError::not_found("Book not found").into_response();
        assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Book not found");
    }
}
