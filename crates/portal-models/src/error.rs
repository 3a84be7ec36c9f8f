//! Domain error taxonomy.
//!
//! A closed set of tagged kinds; callers classify by variant, never by
//! message content. Messages are stable and caller-visible.

use thiserror::Error;

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors surfaced by the services and storage layers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Malformed input: an unparseable identifier, missing required fields.
    #[error("{0}")]
    InvalidArgument(String),

    /// The addressed user, course, collection, or enrollment does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness rule was violated (duplicate email, duplicate enrollment).
    #[error("{0}")]
    Conflict(String),

    /// The storage layer failed. Not a domain condition; never retried here.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl DomainError {
    /// Create an `InvalidArgument` error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a `NotFound` error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a `Conflict` error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Create an `Unavailable` error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}
