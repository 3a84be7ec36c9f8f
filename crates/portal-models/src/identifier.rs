//! User identifier types.
//!
//! Callers may address a user by numeric id or by email. A `by` request
//! parameter can force one interpretation; without it the identifier is
//! auto-detected: anything containing `@` is treated as an email.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Forced interpretation of a user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierHint {
    Email,
    Id,
}

impl IdentifierHint {
    /// Parse the `by` request parameter. Only the literal `"email"` selects
    /// the email path; any other non-empty value forces the id path.
    pub fn from_param(by: Option<&str>) -> Option<Self> {
        match by {
            None | Some("") => None,
            Some("email") => Some(Self::Email),
            Some(_) => Some(Self::Id),
        }
    }
}

/// Whether an unhinted identifier should take the email path.
///
/// Substring match on `@`. Malformed strings containing `@` go down the
/// email path and fail the directory lookup there.
pub fn looks_like_email(identifier: &str) -> bool {
    identifier.contains('@')
}

/// A user id supplied in a request body as either a JSON number or a string.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RawUserId {
    Int(i64),
    Str(String),
}

impl std::fmt::Display for RawUserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawUserId::Int(id) => write!(f, "{id}"),
            RawUserId::Str(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_from_param() {
        assert_eq!(IdentifierHint::from_param(None), None);
        assert_eq!(IdentifierHint::from_param(Some("")), None);
        assert_eq!(
            IdentifierHint::from_param(Some("email")),
            Some(IdentifierHint::Email)
        );
        assert_eq!(IdentifierHint::from_param(Some("id")), Some(IdentifierHint::Id));
        // Anything that is not "email" falls back to the id path.
        assert_eq!(
            IdentifierHint::from_param(Some("banana")),
            Some(IdentifierHint::Id)
        );
    }

    #[test]
    fn test_email_autodetect() {
        assert!(looks_like_email("alice@x.com"));
        assert!(looks_like_email("not@quite@valid"));
        assert!(!looks_like_email("42"));
        assert!(!looks_like_email("abc"));
    }

    #[test]
    fn test_raw_user_id_accepts_number_and_string() {
        let from_number: RawUserId = serde_json::from_str("7").unwrap();
        let from_string: RawUserId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(from_number.to_string(), "7");
        assert_eq!(from_string.to_string(), "7");
    }
}
