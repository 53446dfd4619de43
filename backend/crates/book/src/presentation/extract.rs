//! Request body extraction
//!
//! `axum::Json` rejects with its own plain-text responses. This extractor
//! keeps body failures inside [`BookError`] so they render like every other
//! error, and separates "no JSON sent" from "JSON that does not parse".

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, StatusCode, header};
use serde_json::Value;

use crate::error::BookError;

/// Decoded JSON body; `None` when the request has no body or is not JSON.
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Option<Value>);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = BookError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(reason = %rejection.body_text(), "Failed to read request body");
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                BookError::PayloadTooLarge
            } else {
                BookError::InvalidJson
            }
        })?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(None));
        }

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "Malformed JSON body");
            BookError::InvalidJson
        })?;

        Ok(Self(Some(value)))
    }
}

/// `application/json` or any `application/*+json`, parameters ignored
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
