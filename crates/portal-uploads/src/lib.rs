//! Resume file storage.
//!
//! This crate provides:
//! - A disk backend writing under the configured upload directory
//! - A memory backend for hosts without a writable filesystem
//! - File type and size validation for resume intake

pub mod error;
pub mod store;

pub use error::{UploadError, UploadResult};
pub use store::{
    ResumeFileStore, StorageBackend, StoredFile, MAX_FILES_PER_BATCH, MAX_FILE_SIZE,
};
