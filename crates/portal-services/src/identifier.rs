//! Identifier resolution.

use std::sync::Arc;

use portal_models::identifier::looks_like_email;
use portal_models::{DomainError, DomainResult, IdentifierHint};

use crate::ports::UserStore;

/// Resolves a caller-supplied identifier (numeric id or email) to the
/// canonical id of an existing user.
///
/// Read-only and idempotent; safe to call concurrently.
#[derive(Clone)]
pub struct IdentifierResolver {
    users: Arc<dyn UserStore>,
}

impl IdentifierResolver {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Resolve `identifier` to a user id.
    ///
    /// With no hint, anything containing `@` takes the email path;
    /// otherwise the identifier must parse as an integer id. Never returns
    /// a synthesized id: both paths verify the user exists.
    pub async fn resolve(
        &self,
        identifier: &str,
        hint: Option<IdentifierHint>,
    ) -> DomainResult<i64> {
        let email_path = match hint {
            Some(IdentifierHint::Email) => true,
            Some(IdentifierHint::Id) => false,
            None => looks_like_email(identifier),
        };

        if email_path {
            let user = self.users.find_by_email(identifier).await?.ok_or_else(|| {
                DomainError::not_found(format!("User with email {identifier} not found"))
            })?;
            return Ok(user.id);
        }

        let user_id: i64 = identifier.trim().parse().map_err(|_| {
            DomainError::invalid_argument(format!("Invalid user identifier: {identifier}"))
        })?;

        match self.users.find_by_id(user_id).await? {
            Some(_) => Ok(user_id),
            None => Err(DomainError::not_found(format!(
                "User with ID {user_id} not found"
            ))),
        }
    }
}
