//! Request checks that run before a body is deserialized.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderMap, StatusCode};
use serde_json::Value;
use tracing::error;

use crate::errors::AppError;

pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Rejects requests whose `Content-Type` is not exactly `expected`.
///
/// A missing header is a bad request; any other value is an unsupported
/// media type, whatever the body contains.
pub fn check_content_type(headers: &HeaderMap, expected: &str) -> Result<(), AppError> {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        error!("No Content-Type specified.");
        return Err(AppError::BadRequest(format!(
            "Content-Type header is missing, must be {}",
            expected
        )));
    };

    match value.to_str() {
        Ok(content_type) if content_type == expected => Ok(()),
        Ok(content_type) => {
            error!("Invalid Content-Type: {}", content_type);
            Err(AppError::UnsupportedMediaType(format!(
                "Content-Type must be {}",
                expected
            )))
        }
        Err(_) => {
            error!("Content-Type header is not valid ASCII");
            Err(AppError::UnsupportedMediaType(format!(
                "Content-Type must be {}",
                expected
            )))
        }
    }
}

/// The raw request body, with body-read failures reported as JSON errors.
///
/// Wraps axum's `Bytes` extractor so that an oversized body (over the default
/// body limit) is a 413 and any other read failure a 400, both in the service's
/// error format rather than axum's plain-text rejection.
pub struct RawBody(pub Bytes);

#[async_trait]
impl<S> FromRequest<S> for RawBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Bytes::from_request(req, state)
            .await
            .map(RawBody)
            .map_err(|rejection| {
                let status = rejection.status();
                let message = rejection.body_text();
                error!("Failed to read request body: {}", message);
                if status == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::PayloadTooLarge(message)
                } else {
                    AppError::BadRequest(message)
                }
            })
    }
}

pub fn parse_json_body(body: &Bytes) -> Result<Value, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        error!("Request body is not valid JSON: {}", e);
        AppError::BadRequest(format!("Request body is not valid JSON: {}", e))
    })
}
