//! Uploads service.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tokio::fs;
use tracing::info;

use crate::uploads::UploadsServiceError;

/// Prefix of every stored upload's filename.
pub const UPLOAD_FILENAME_PREFIX: &str = "product";

/// Path segment uploads are served under.
pub const UPLOAD_URL_SEGMENT: &str = "images";

/// A file that now lives in the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    pub filename: String,
    pub url: String,
}

/// Stores uploads as plain files in one directory.
#[derive(Debug, Clone)]
pub struct DiskUploadsService {
    dir: PathBuf,
    base_url: String,
}

impl DiskUploadsService {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub async fn ensure_dir(&self) -> Result<(), UploadsServiceError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(UploadsServiceError::Directory)
    }
}

#[async_trait]
impl UploadsService for DiskUploadsService {
    async fn store(
        &self,
        original_name: Option<String>,
        source: PathBuf,
    ) -> Result<StoredUpload, UploadsServiceError> {
        let filename = upload_filename(
            Timestamp::now().as_millisecond(),
            original_name.as_deref(),
        );

        fs::copy(&source, self.dir.join(&filename))
            .await
            .map_err(UploadsServiceError::Store)?;

        info!(filename = %filename, "stored upload");

        Ok(StoredUpload {
            url: public_url(&self.base_url, &filename),
            filename,
        })
    }
}

#[automock]
#[async_trait]
pub trait UploadsService: Send + Sync {
    /// Copy the file at `source` into the upload directory under a fresh name.
    async fn store(
        &self,
        original_name: Option<String>,
        source: PathBuf,
    ) -> Result<StoredUpload, UploadsServiceError>;
}

/// `product_<millis><.ext>`, keeping the client's extension if it had one.
pub(crate) fn upload_filename(millis: i64, original_name: Option<&str>) -> String {
    let extension = original_name
        .map(Path::new)
        .and_then(Path::extension)
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    format!("{UPLOAD_FILENAME_PREFIX}_{millis}{extension}")
}

pub(crate) fn public_url(base_url: &str, filename: &str) -> String {
    format!(
        "{}/{UPLOAD_URL_SEGMENT}/{filename}",
        base_url.trim_end_matches('/')
    )
}
