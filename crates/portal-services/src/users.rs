//! User directory service.

use std::sync::Arc;

use tracing::debug;

use portal_models::{DomainError, DomainResult, User, UserChanges, UserDraft};

use crate::ports::UserStore;

/// CRUD rules for the user directory. Email uniqueness is checked up
/// front for a friendly message; the storage constraint backs it up.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// All users, newest first.
    pub async fn list(&self) -> DomainResult<Vec<User>> {
        self.users.find_all().await
    }

    pub async fn get(&self, id: i64) -> DomainResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User not found"))
    }

    pub async fn get_by_email(&self, email: &str) -> DomainResult<User> {
        self.users
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found("User not found"))
    }

    pub async fn create(&self, draft: UserDraft) -> DomainResult<User> {
        let name = draft.name.unwrap_or_default();
        let email = draft.email.unwrap_or_default();
        if name.is_empty() || email.is_empty() {
            return Err(DomainError::invalid_argument("Name and email are required"));
        }

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(duplicate_email());
        }

        let user = self.users.insert(&name, &email, draft.age).await?;
        debug!(user_id = user.id, "user created");
        Ok(user)
    }

    /// Update a user, merging absent fields with current values. A changed
    /// email is re-checked for uniqueness.
    pub async fn update(&self, id: i64, changes: UserChanges) -> DomainResult<User> {
        let current = self.get(id).await?;

        if let Some(email) = changes.email.as_deref() {
            if email != current.email && self.users.find_by_email(email).await?.is_some() {
                return Err(duplicate_email());
            }
        }

        let name = changes.name.unwrap_or(current.name);
        let email = changes.email.unwrap_or(current.email);
        let age = changes.age.or(current.age);
        self.users.update(id, &name, &email, age).await
    }

    /// Delete a user. Enrollment rows referencing it are removed by the
    /// storage layer's cascade.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.get(id).await?;
        self.users.delete(id).await?;
        debug!(user_id = id, "user deleted");
        Ok(())
    }
}

fn duplicate_email() -> DomainError {
    DomainError::conflict("User with this email already exists")
}
