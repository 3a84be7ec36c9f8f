//! Enrollment models.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user↔course relation record.
///
/// The `(user_id, course_id)` pair is unique: the relation is a set, not a
/// multiset. Rows are only written by the enrollment coordinator and are
/// removed when the referenced user or course is deleted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, FromRow)]
pub struct Enrollment {
    pub user_id: i64,

    pub course_id: i64,

    /// Server-assigned at creation.
    pub enrolled_at: DateTime<Utc>,
}

/// An enrollment joined with its course and the course owner
/// ("instructor"), as returned by per-user enrollment listings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, FromRow)]
pub struct EnrolledCourse {
    /// Course id.
    pub id: i64,

    pub name: String,

    pub description: String,

    /// Course owner, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    pub created_at: DateTime<Utc>,

    pub enrolled_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_email: Option<String>,
}
