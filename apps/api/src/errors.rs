use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;
use crate::upload::UploadError;
use crate::validation::SchemaViolation;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// 5xx bodies rendered here still carry detail; in the production posture
/// the outermost router layer collapses them to a generic envelope.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing or unreadable backing data is an operator fault, not a
    /// caller fault: it surfaces as a 500.
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Schema(#[from] SchemaViolation),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::Io(source) => AppError::Internal(
                anyhow::Error::new(source).context("failed to persist uploaded CV"),
            ),
            rejected => AppError::BadRequest(rejected.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Store(e) => {
                tracing::error!("data store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATA_ERROR",
                    e.to_string(),
                )
            }
            AppError::Schema(violation) => {
                tracing::error!("backing data failed schema validation: {violation}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATA_ERROR",
                    violation.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    e.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
