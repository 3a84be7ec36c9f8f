//! Enrollment ledger over PostgreSQL.
//!
//! The `(user_id, course_id)` primary key makes a duplicate insert fail at
//! write time regardless of what any pre-check observed; that failure maps
//! to the same `Conflict` the coordinator raises on its fast path.

use async_trait::async_trait;
use sqlx::PgPool;

use portal_models::{DomainError, DomainResult, EnrolledCourse, Enrollment};
use portal_services::EnrollmentStore;

use crate::error::{map_write_err, unavailable};

pub struct PgEnrollmentStore {
    pool: PgPool,
}

impl PgEnrollmentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentStore for PgEnrollmentStore {
    async fn find(&self, user_id: i64, course_id: i64) -> DomainResult<Option<Enrollment>> {
        sqlx::query_as::<_, Enrollment>(
            "SELECT user_id, course_id, enrolled_at FROM enrollments \
             WHERE user_id = $1 AND course_id = $2",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(unavailable)
    }

    async fn list_for_user(&self, user_id: i64) -> DomainResult<Vec<EnrolledCourse>> {
        sqlx::query_as::<_, EnrolledCourse>(
            "SELECT c.id, c.name, c.description, c.user_id, c.created_at, e.enrolled_at, \
                    u.id AS instructor_id, u.name AS instructor_name, u.email AS instructor_email \
             FROM enrollments e \
             JOIN courses c ON e.course_id = c.id \
             LEFT JOIN users u ON c.user_id = u.id \
             WHERE e.user_id = $1 \
             ORDER BY e.enrolled_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(unavailable)
    }

    async fn insert(&self, user_id: i64, course_id: i64) -> DomainResult<Enrollment> {
        sqlx::query_as::<_, Enrollment>(
            "INSERT INTO enrollments (user_id, course_id) VALUES ($1, $2) \
             RETURNING user_id, course_id, enrolled_at",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_err(
                e,
                DomainError::conflict("User is already enrolled in this course"),
            )
        })
    }

    async fn delete(&self, user_id: i64, course_id: i64) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM enrollments WHERE user_id = $1 AND course_id = $2")
            .bind(user_id)
            .bind(course_id)
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;
        Ok(result.rows_affected() > 0)
    }
}
