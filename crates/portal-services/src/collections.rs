//! Job collection service.
//!
//! Collections mirror the course rules but have no enrollment relation.

use std::sync::Arc;

use tracing::debug;

use portal_models::{
    Collection, CollectionChanges, CollectionDraft, DomainError, DomainResult, IdentifierHint,
};

use crate::identifier::IdentifierResolver;
use crate::ports::CollectionStore;

#[derive(Clone)]
pub struct CollectionService {
    collections: Arc<dyn CollectionStore>,
    resolver: IdentifierResolver,
}

impl CollectionService {
    pub fn new(collections: Arc<dyn CollectionStore>, resolver: IdentifierResolver) -> Self {
        Self {
            collections,
            resolver,
        }
    }

    pub async fn list(&self) -> DomainResult<Vec<Collection>> {
        self.collections.find_all().await
    }

    pub async fn get(&self, id: i64) -> DomainResult<Collection> {
        self.collections
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Job collection not found"))
    }

    pub async fn list_for_user(
        &self,
        identifier: &str,
        hint: Option<IdentifierHint>,
    ) -> DomainResult<Vec<Collection>> {
        let user_id = self.resolver.resolve(identifier, hint).await?;
        self.collections.find_by_owner(user_id).await
    }

    pub async fn create(&self, draft: CollectionDraft) -> DomainResult<Collection> {
        let name = draft.name.unwrap_or_default();
        let description = draft.description.unwrap_or_default();
        if name.is_empty() || description.is_empty() {
            return Err(DomainError::invalid_argument(
                "Name and description are required",
            ));
        }

        let owner = match (draft.user_id, draft.user_email) {
            (Some(id), _) => Some(id),
            (None, Some(email)) if !email.is_empty() => Some(
                self.resolver
                    .resolve(&email, Some(IdentifierHint::Email))
                    .await?,
            ),
            _ => None,
        };

        let collection = self.collections.insert(&name, &description, owner).await?;
        debug!(collection_id = collection.id, "collection created");
        Ok(collection)
    }

    pub async fn update(&self, id: i64, changes: CollectionChanges) -> DomainResult<Collection> {
        let current = self.get(id).await?;

        let name = changes.name.unwrap_or(current.name);
        let description = changes.description.unwrap_or(current.description);
        let user_id = changes.user_id.or(current.user_id);
        self.collections
            .update(id, &name, &description, user_id)
            .await
    }

    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.get(id).await?;
        self.collections.delete(id).await?;
        debug!(collection_id = id, "collection deleted");
        Ok(())
    }
}
