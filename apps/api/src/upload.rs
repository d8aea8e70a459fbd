//! CV upload handler: validates and persists the replacement PDF.
//!
//! The write is a whole-file overwrite with last-write-wins semantics;
//! concurrent uploads may race and the later write stands. No versioning
//! and no content scanning — the payload is trusted operator input.

use std::path::Path;

use bytes::Bytes;
use thiserror::Error;

pub const CV_CONTENT_TYPE: &str = "application/pdf";
pub const CV_FILENAME: &str = "CV.pdf";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Only PDF files are supported.")]
    UnsupportedType,

    #[error("Uploaded file is empty.")]
    EmptyPayload,

    #[error("failed to persist uploaded CV: {0}")]
    Io(#[from] std::io::Error),
}

/// Validates the payload and writes it as `uploads/CV.pdf`, overwriting any
/// previous upload. Nothing is written when validation fails. Content type
/// is checked before the payload, so a mislabeled empty upload reports the
/// type problem.
pub async fn store_cv_upload(
    upload_dir: &Path,
    content_type: Option<&str>,
    payload: &Bytes,
) -> Result<(), UploadError> {
    if content_type != Some(CV_CONTENT_TYPE) {
        return Err(UploadError::UnsupportedType);
    }
    if payload.is_empty() {
        return Err(UploadError::EmptyPayload);
    }

    tokio::fs::create_dir_all(upload_dir).await?;
    tokio::fs::write(upload_dir.join(CV_FILENAME), payload).await?;
    Ok(())
}
