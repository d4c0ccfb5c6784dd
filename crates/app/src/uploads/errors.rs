//! Uploads service errors.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadsServiceError {
    #[error("upload directory could not be prepared")]
    Directory(#[source] io::Error),

    #[error("uploaded file could not be stored")]
    Store(#[source] io::Error),
}
