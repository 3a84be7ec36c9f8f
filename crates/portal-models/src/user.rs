//! User models.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A user identity record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, FromRow)]
pub struct User {
    /// Stable numeric id, assigned at creation.
    pub id: i64,

    pub name: String,

    /// Unique across all users.
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,

    pub created_at: DateTime<Utc>,
}

/// Creation payload. Name and email are required; the services reject
/// drafts missing either.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, Validate)]
pub struct UserDraft {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[serde(default)]
    pub age: Option<i32>,
}

/// Partial update; absent fields keep their current values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, Validate)]
pub struct UserChanges {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[serde(default)]
    pub age: Option<i32>,
}
