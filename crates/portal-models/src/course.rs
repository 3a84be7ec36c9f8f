//! Course models.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A course joined with its optional owner.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, FromRow)]
pub struct Course {
    pub id: i64,

    pub name: String,

    pub description: String,

    /// Owning user, if any. Cleared when the owner is deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    pub created_at: DateTime<Utc>,

    /// Owner name from the joined users row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// Owner email from the joined users row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

/// Creation payload. `user_email` may stand in for `user_id`; when both are
/// absent the course has no owner.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CourseDraft {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub user_id: Option<i64>,

    #[serde(default)]
    pub user_email: Option<String>,
}

/// Partial update; absent fields keep their current values. The owner can
/// be reassigned but not cleared through an update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CourseChanges {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub user_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_serialization_skips_missing_owner() {
        let course = Course {
            id: 3,
            name: "Rust 101".to_string(),
            description: "Intro".to_string(),
            user_id: None,
            created_at: Utc::now(),
            user_name: None,
            user_email: None,
        };
        let json = serde_json::to_string(&course).unwrap();
        assert!(!json.contains("user_id"));
        assert!(!json.contains("user_name"));
    }
}
