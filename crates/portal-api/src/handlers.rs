//! Request handlers.

pub mod collections;
pub mod courses;
pub mod health;
pub mod index;
pub mod resumes;
pub mod users;

use serde::Deserialize;
use validator::Validate;

use crate::error::ApiError;

/// `?by=email|id` query for identifier-path routes.
#[derive(Debug, Deserialize)]
pub struct ByQuery {
    pub by: Option<String>,
}

/// Parse a numeric path parameter.
pub(crate) fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid ID parameter"))
}

/// Reject bodies missing required fields, naming them.
pub(crate) fn require_fields(fields: &[(&str, bool)]) -> Result<(), ApiError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::bad_request(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// Run declarative payload validation, surfacing the first rule message.
pub(crate) fn validate_payload<T: Validate>(payload: &T) -> Result<(), ApiError> {
    payload.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|list| list.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request payload".to_string());
        ApiError::bad_request(message)
    })
}
