//! Resume metadata storage over PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use portal_models::{DomainResult, Resume};
use portal_services::ResumeStore;

use crate::error::unavailable;

const RESUME_COLUMNS: &str = "id, hr_id, filename, file_path, status, uploaded_at";

pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn insert(
        &self,
        hr_id: i64,
        filename: &str,
        file_path: &str,
        status: &str,
    ) -> DomainResult<Resume> {
        sqlx::query_as::<_, Resume>(&format!(
            "INSERT INTO resumes (hr_id, filename, file_path, status) \
             VALUES ($1, $2, $3, $4) RETURNING {RESUME_COLUMNS}"
        ))
        .bind(hr_id)
        .bind(filename)
        .bind(file_path)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(unavailable)
    }

    async fn list_for_hr(&self, hr_id: i64) -> DomainResult<Vec<Resume>> {
        sqlx::query_as::<_, Resume>(&format!(
            "SELECT {RESUME_COLUMNS} FROM resumes WHERE hr_id = $1 ORDER BY id DESC"
        ))
        .bind(hr_id)
        .fetch_all(&self.pool)
        .await
        .map_err(unavailable)
    }
}
