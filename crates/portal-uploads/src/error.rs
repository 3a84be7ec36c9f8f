//! Error types for upload storage.

use thiserror::Error;

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

/// Errors that can occur while accepting or storing a resume file.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Only PDF, DOC, DOCX, JPEG, JPG, PNG files are allowed!")]
    DisallowedType,

    #[error("File exceeds the 10 MB size limit ({size} bytes)")]
    TooLarge { size: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
