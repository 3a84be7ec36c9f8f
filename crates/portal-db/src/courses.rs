//! Course storage over PostgreSQL.
//!
//! Reads join the owning user so callers get `user_name`/`user_email`
//! alongside each course.

use async_trait::async_trait;
use sqlx::PgPool;

use portal_models::{Course, DomainError, DomainResult};
use portal_services::CourseStore;

use crate::error::{map_write_err, unavailable};

const SELECT_JOINED: &str = "SELECT c.id, c.name, c.description, c.user_id, c.created_at, \
     u.name AS user_name, u.email AS user_email \
     FROM courses c LEFT JOIN users u ON c.user_id = u.id";

pub struct PgCourseStore {
    pool: PgPool,
}

impl PgCourseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_joined(&self, id: i64) -> DomainResult<Option<Course>> {
        sqlx::query_as::<_, Course>(&format!("{SELECT_JOINED} WHERE c.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(unavailable)
    }
}

#[async_trait]
impl CourseStore for PgCourseStore {
    async fn find_all(&self) -> DomainResult<Vec<Course>> {
        sqlx::query_as::<_, Course>(&format!("{SELECT_JOINED} ORDER BY c.id DESC"))
            .fetch_all(&self.pool)
            .await
            .map_err(unavailable)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Course>> {
        self.fetch_joined(id).await
    }

    async fn find_by_owner(&self, user_id: i64) -> DomainResult<Vec<Course>> {
        sqlx::query_as::<_, Course>(&format!(
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
    ) -> DomainResult<Course> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO courses (name, description, user_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(name)
        .bind(description)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_err(e, DomainError::conflict("Duplicate entry. This record already exists.")))?;

        // Re-read through the join so the owner fields are populated.
        self.fetch_joined(id).await?.ok_or_else(|| {
            DomainError::unavailable(format!("course {id} missing after insert"))
        })
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
        user_id: Option<i64>,
    ) -> DomainResult<Course> {
        sqlx::query("UPDATE courses SET name = $1, description = $2, user_id = $3 WHERE id = $4")
            .bind(name)
            .bind(description)
            .bind(user_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_err(e, DomainError::conflict("Duplicate entry. This record already exists.")))?;

        self.fetch_joined(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Course not found"))
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;
        Ok(())
    }
}
