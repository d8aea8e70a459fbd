//! Binary asset handlers: CV download, profile photo, and CV upload.

use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::errors::AppError;
use crate::state::AppState;
use crate::store::StoreError;
use crate::upload::{self, store_cv_upload};

/// Suggested filename for the CV download, regardless of which file backs it.
pub const CV_DOWNLOAD_NAME: &str = "Artur_Gorczynski_CV.pdf";

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub status: &'static str,
    pub filename: &'static str,
}

/// GET /api/cv/download
/// Serves the uploaded CV when one exists, the bundled default otherwise.
#[utoipa::path(
    get,
    path = "/api/cv/download",
    responses(
        (status = 200, description = "CV as PDF", body = Vec<u8>, content_type = "application/pdf"),
        (status = 500, description = "No CV file available")
    )
)]
pub async fn download_cv(State(state): State<AppState>) -> Result<Response, AppError> {
    let path = state.store.cv_download_path();
    let bytes = state.store.read_bytes(&path).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{CV_DOWNLOAD_NAME}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// GET /api/photo
#[utoipa::path(
    get,
    path = "/api/photo",
    responses(
        (status = 200, description = "Profile photo", body = Vec<u8>, content_type = "image/jpeg"),
        (status = 404, description = "No photo asset present")
    )
)]
pub async fn photo(State(state): State<AppState>) -> Result<Response, AppError> {
    let path = state.store.photo();
    let bytes = match state.store.read_bytes(&path).await {
        Ok(bytes) => bytes,
        Err(StoreError::Missing { .. }) => {
            return Err(AppError::NotFound("profile photo is not available".into()))
        }
        Err(other) => return Err(other.into()),
    };
    Ok(([(header::CONTENT_TYPE, "image/jpeg")], bytes).into_response())
}

/// POST /api/cv/upload
/// Accepts a single `file` part that must be a non-empty PDF.
#[utoipa::path(
    post,
    path = "/api/cv/upload",
    request_body(content = String, content_type = "multipart/form-data", description = "PDF in a 'file' part"),
    responses(
        (status = 200, body = UploadResponse),
        (status = 400, description = "Not a PDF, or empty payload")
    )
)]
pub async fn upload_cv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let payload = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        store_cv_upload(&state.store.upload_dir(), content_type.as_deref(), &payload).await?;
        tracing::info!(bytes = payload.len(), "stored replacement CV");

        return Ok(Json(UploadResponse {
            status: "uploaded",
            filename: upload::CV_FILENAME,
        }));
    }

    Err(AppError::BadRequest(
        "A 'file' field is required.".to_string(),
    ))
}
