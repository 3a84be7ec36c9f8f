//! Disk and memory storage backends.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{UploadError, UploadResult};

/// Per-file size cap (10 MB).
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Max files accepted in one upload batch.
pub const MAX_FILES_PER_BATCH: usize = 10;

/// Accepted resume file extensions; the declared content type must match
/// one of these as a substring too.
const ALLOWED_TYPES: &[&str] = &["jpeg", "jpg", "png", "pdf", "doc", "docx"];

/// Where uploaded bytes go.
#[derive(Debug, Clone)]
pub enum StorageBackend {
    /// Persist under the given directory.
    Disk { dir: PathBuf },
    /// Keep nothing; record a placeholder path. Used where the filesystem
    /// is not writable.
    Memory,
}

impl StorageBackend {
    /// Pick a backend from the environment: serverless markers force the
    /// memory backend, everything else gets disk storage under
    /// `{upload_dir}/resumes`.
    pub fn from_env(upload_dir: &Path) -> Self {
        let serverless =
            std::env::var("VERCEL").is_ok() || std::env::var("AWS_LAMBDA_FUNCTION_NAME").is_ok();
        if serverless {
            Self::Memory
        } else {
            Self::Disk {
                dir: upload_dir.join("resumes"),
            }
        }
    }
}

/// A stored (or placeholder) file.
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// Original filename as supplied by the client.
    pub filename: String,
    /// Storage path, or a `memory://` placeholder.
    pub file_path: String,
}

/// Stores resume files for later review.
#[derive(Debug, Clone)]
pub struct ResumeFileStore {
    backend: StorageBackend,
}

impl ResumeFileStore {
    pub fn new(backend: StorageBackend) -> Self {
        Self { backend }
    }

    /// Check name, declared content type, and size before accepting a file.
    pub fn validate(
        &self,
        filename: &str,
        content_type: Option<&str>,
        size: usize,
    ) -> UploadResult<()> {
        if size > MAX_FILE_SIZE {
            return Err(UploadError::TooLarge { size });
        }
        if !is_allowed(filename, content_type) {
            return Err(UploadError::DisallowedType);
        }
        Ok(())
    }

    /// Store the bytes, returning the recorded path.
    pub async fn store(&self, filename: &str, bytes: &[u8]) -> UploadResult<StoredFile> {
        match &self.backend {
            StorageBackend::Memory => Ok(StoredFile {
                filename: filename.to_string(),
                file_path: format!("memory://{}-{}", Utc::now().timestamp_millis(), filename),
            }),
            StorageBackend::Disk { dir } => {
                tokio::fs::create_dir_all(dir).await?;
                let path = dir.join(unique_name(filename));
                tokio::fs::write(&path, bytes).await?;
                debug!(file = %path.display(), size = bytes.len(), "stored resume file");
                Ok(StoredFile {
                    filename: filename.to_string(),
                    file_path: path.to_string_lossy().into_owned(),
                })
            }
        }
    }
}

fn extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

fn is_allowed(filename: &str, content_type: Option<&str>) -> bool {
    let ext_ok = extension(filename)
        .map(|ext| ALLOWED_TYPES.contains(&ext.as_str()))
        .unwrap_or(false);
    let type_ok = match content_type {
        Some(ct) => ALLOWED_TYPES.iter().any(|t| ct.contains(t)),
        None => true,
    };
    ext_ok && type_ok
}

/// `{stem}-{millis}-{rand}.{ext}` keeps concurrent uploads of the same
/// filename from colliding.
fn unique_name(filename: &str) -> String {
    let path = Path::new(filename);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("resume");
    let uuid = Uuid::new_v4().simple().to_string();
    let suffix = format!("{}-{}", Utc::now().timestamp_millis(), &uuid[..8]);
    match extension(filename) {
        Some(ext) => format!("{stem}-{suffix}.{ext}"),
        None => format!("{stem}-{suffix}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_pdf() {
        let store = ResumeFileStore::new(StorageBackend::Memory);
        assert!(store
            .validate("resume.pdf", Some("application/pdf"), 1024)
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_disallowed_extension() {
        let store = ResumeFileStore::new(StorageBackend::Memory);
        let err = store
            .validate("malware.exe", Some("application/octet-stream"), 1024)
            .unwrap_err();
        assert!(matches!(err, UploadError::DisallowedType));
    }

    #[test]
    fn test_validate_rejects_oversize() {
        let store = ResumeFileStore::new(StorageBackend::Memory);
        let err = store
            .validate("resume.pdf", Some("application/pdf"), MAX_FILE_SIZE + 1)
            .unwrap_err();
        assert!(matches!(err, UploadError::TooLarge { .. }));
    }

    #[test]
    fn test_docx_content_type_matches() {
        // The docx content type only contains "doc" as a substring; that
        // is enough, matching the extension filter.
        assert!(is_allowed(
            "cv.docx",
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        ));
    }

    #[test]
    fn test_unique_names_differ() {
        let a = unique_name("resume.pdf");
        let b = unique_name("resume.pdf");
        assert_ne!(a, b);
        assert!(a.starts_with("resume-"));
        assert!(a.ends_with(".pdf"));
    }

    #[tokio::test]
    async fn test_disk_store_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResumeFileStore::new(StorageBackend::Disk {
            dir: dir.path().to_path_buf(),
        });

        let stored = store.store("resume.pdf", b"content").await.unwrap();
        assert_eq!(stored.filename, "resume.pdf");
        let written = std::fs::read(&stored.file_path).unwrap();
        assert_eq!(written, b"content");
    }

    #[tokio::test]
    async fn test_memory_store_records_placeholder() {
        let store = ResumeFileStore::new(StorageBackend::Memory);
        let stored = store.store("resume.pdf", b"content").await.unwrap();
        assert!(stored.file_path.starts_with("memory://"));
    }
}
