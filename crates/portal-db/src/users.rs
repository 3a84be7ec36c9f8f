//! User directory over PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use portal_models::{DomainError, DomainResult, User};
use portal_services::UserStore;

use crate::error::{map_write_err, unavailable};

const USER_COLUMNS: &str = "id, name, email, age, created_at";

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn duplicate_email() -> DomainError {
    DomainError::conflict("User with this email already exists")
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_all(&self) -> DomainResult<Vec<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(unavailable)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(unavailable)
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(unavailable)
    }

    async fn insert(&self, name: &str, email: &str, age: Option<i32>) -> DomainResult<User> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, email, age) VALUES ($1, $2, $3) RETURNING {USER_COLUMNS}"
        ))
        .bind(name)
        .bind(email)
        .bind(age)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_err(e, duplicate_email()))
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        age: Option<i32>,
    ) -> DomainResult<User> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET name = $1, email = $2, age = $3 WHERE id = $4 RETURNING {USER_COLUMNS}"
        ))
        .bind(name)
        .bind(email)
        .bind(age)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => DomainError::not_found("User not found"),
            e => map_write_err(e, duplicate_email()),
        })
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;
        Ok(())
    }
}
