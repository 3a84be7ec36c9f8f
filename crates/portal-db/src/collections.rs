//! Job collection storage over PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use portal_models::{Collection, DomainError, DomainResult};
use portal_services::CollectionStore;

use crate::error::{map_write_err, unavailable};

const SELECT_JOINED: &str = "SELECT c.id, c.name, c.description, c.user_id, c.created_at, \
     u.name AS user_name, u.email AS user_email \
     FROM collections c LEFT JOIN users u ON c.user_id = u.id";

pub struct PgCollectionStore {
    pool: PgPool,
}

impl PgCollectionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_joined(&self, id: i64) -> DomainResult<Option<Collection>> {
        sqlx::query_as::<_, Collection>(&format!("{SELECT_JOINED} WHERE c.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(unavailable)
    }
}

#[async_trait]
impl CollectionStore for PgCollectionStore {
    async fn find_all(&self) -> DomainResult<Vec<Collection>> {
        sqlx::query_as::<_, Collection>(&format!("{SELECT_JOINED} ORDER BY c.id DESC"))
            .fetch_all(&self.pool)
            .await
            .map_err(unavailable)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Collection>> {
        self.fetch_joined(id).await
    }

    async fn find_by_owner(&self, user_id: i64) -> DomainResult<Vec<Collection>> {
        sqlx::query_as::<_, Collection>(&format!(
            "{SELECT_JOINED} WHERE c.user_id = $1 ORDER BY c.id DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(unavailable)
    }

    async fn insert(
        &self,
        name: &str,
        description: &str,
        user_id: Option<i64>,
    ) -> DomainResult<Collection> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO collections (name, description, user_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(name)
        .bind(description)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_err(e, DomainError::conflict("Duplicate entry. This record already exists.")))?;

        self.fetch_joined(id).await?.ok_or_else(|| {
            DomainError::unavailable(format!("collection {id} missing after insert"))
        })
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
        user_id: Option<i64>,
    ) -> DomainResult<Collection> {
        sqlx::query(
            "UPDATE collections SET name = $1, description = $2, user_id = $3 WHERE id = $4",
        )
        .bind(name)
        .bind(description)
        .bind(user_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_err(e, DomainError::conflict("Duplicate entry. This record already exists.")))?;

        self.fetch_joined(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Job collection not found"))
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        sqlx::query("DELETE FROM collections WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;
        Ok(())
    }
}
