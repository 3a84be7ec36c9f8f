//! sqlx error classification.
//!
//! Constraint violations carry domain meaning; everything else is an
//! `Unavailable` storage failure.

use portal_models::DomainError;

/// SQLSTATE: unique-constraint violation.
const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE: foreign-key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

fn sqlstate(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db) => db.code().map(|c| c.into_owned()),
        _ => None,
    }
}

/// Default mapping for storage failures with no domain meaning.
pub(crate) fn unavailable(err: sqlx::Error) -> DomainError {
    DomainError::unavailable(err.to_string())
}

/// Map a write error. A unique violation becomes the given conflict (the
/// storage constraint is the authoritative duplicate signal even when a
/// pre-write check raced); a foreign-key violation means a referenced row
/// vanished.
pub(crate) fn map_write_err(err: sqlx::Error, on_unique: DomainError) -> DomainError {
    match sqlstate(&err).as_deref() {
        Some(UNIQUE_VIOLATION) => on_unique,
        Some(FOREIGN_KEY_VIOLATION) => {
            DomainError::invalid_argument("Referenced record does not exist.")
        }
        _ => unavailable(err),
    }
}
