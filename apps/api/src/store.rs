//! Data store accessor: resolves logical resource names to files under the
//! data root and parses them fresh on every call. The dataset is a handful
//! of small files read at human browsing frequency, so there is no cache.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

pub const PROFILE_FILE: &str = "profile.json";
pub const CV_FILE: &str = "cv.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const TECHNOLOGIES_FILE: &str = "technologies.json";
pub const INFO_POINTS_FILE: &str = "info_points.json";
pub const EVANGELIST_FILE: &str = "evangelist.json";

pub const BUNDLED_CV_PDF: &str = "CV.pdf";
pub const PHOTO_FILE: &str = "artur.jpg";
pub const UPLOAD_DIR: &str = "uploads";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backing file '{}' is missing", .path.display())]
    Missing { path: PathBuf },

    #[error("backing file '{}' does not match the expected shape: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read-only view over the data directory. The only writer is the upload
/// handler, which owns `uploads/` exclusively.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Reads and parses a named JSON resource into its typed shape.
    pub async fn fetch<T: DeserializeOwned>(&self, name: &str) -> Result<T, StoreError> {
        let path = self.root.join(name);
        let bytes = self.read_bytes(&path).await?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed { path, source })
    }

    /// Reads a raw asset, distinguishing absence from other I/O failure.
    pub async fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, StoreError> {
        tokio::fs::read(path).await.map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                StoreError::Missing {
                    path: path.to_path_buf(),
                }
            } else {
                StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })
    }

    pub fn bundled_cv(&self) -> PathBuf {
        self.root.join(BUNDLED_CV_PDF)
    }

    pub fn photo(&self) -> PathBuf {
        self.root.join(PHOTO_FILE)
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.root.join(UPLOAD_DIR)
    }

    pub fn uploaded_cv(&self) -> PathBuf {
        self.upload_dir().join(BUNDLED_CV_PDF)
    }

    /// An uploaded CV, when present, supersedes the bundled default.
    pub fn cv_download_path(&self) -> PathBuf {
        let uploaded = self.uploaded_cv();
        if uploaded.exists() {
            uploaded
        } else {
            self.bundled_cv()
        }
    }
}
