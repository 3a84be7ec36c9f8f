//! Resume upload models.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored resume record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, FromRow)]
pub struct Resume {
    pub id: i64,

    /// The HR user who uploaded the file.
    pub hr_id: i64,

    /// Original filename as supplied by the client.
    pub filename: String,

    /// Storage path, or a `memory://` placeholder on the memory backend.
    pub file_path: String,

    pub status: String,

    pub uploaded_at: DateTime<Utc>,
}

/// Per-file success entry in an upload batch response.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct UploadedResume {
    pub id: i64,
    pub filename: String,
    pub file_path: String,
    pub status: String,
}

/// Per-file failure entry in an upload batch response.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct FailedResume {
    pub filename: String,
    pub error: String,
}
