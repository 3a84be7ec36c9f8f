//! Storage ports.
//!
//! Traits the services depend on, implemented by the database crate. Every
//! method is a single storage round trip with no retries; transient
//! failures surface as [`DomainError::Unavailable`].

use async_trait::async_trait;
use portal_models::{Collection, Course, DomainResult, EnrolledCourse, Enrollment, Resume, User};

#[cfg(test)]
use portal_models::DomainError;

/// Canonical store of user identity records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<User>>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Insert a user. A duplicate email must surface as `Conflict` even
    /// when a pre-insert check raced.
    async fn insert(&self, name: &str, email: &str, age: Option<i32>) -> DomainResult<User>;

    async fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        age: Option<i32>,
    ) -> DomainResult<User>;

    /// Delete a user; enrollment rows referencing it go with it.
    async fn delete(&self, id: i64) -> DomainResult<()>;
}

/// Course storage, including the owner join on reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Course>>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Course>>;

    async fn find_by_owner(&self, user_id: i64) -> DomainResult<Vec<Course>>;

    async fn insert(
        &self,
        name: &str,
        description: &str,
        user_id: Option<i64>,
    ) -> DomainResult<Course>;

    async fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
        user_id: Option<i64>,
    ) -> DomainResult<Course>;

    async fn delete(&self, id: i64) -> DomainResult<()>;
}

/// Job collection storage; same shape as courses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionStore: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Collection>>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Collection>>;

    async fn find_by_owner(&self, user_id: i64) -> DomainResult<Vec<Collection>>;

    async fn insert(
        &self,
        name: &str,
        description: &str,
        user_id: Option<i64>,
    ) -> DomainResult<Collection>;

    async fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
        user_id: Option<i64>,
    ) -> DomainResult<Collection>;

    async fn delete(&self, id: i64) -> DomainResult<()>;
}

/// The enrollment ledger. Writes go through the coordinator only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentStore: Send + Sync {
    async fn find(&self, user_id: i64, course_id: i64) -> DomainResult<Option<Enrollment>>;

    /// Every enrollment for a user joined with course and owner, most
    /// recently enrolled first.
    async fn list_for_user(&self, user_id: i64) -> DomainResult<Vec<EnrolledCourse>>;

    /// Insert the pair. The ledger's uniqueness constraint is the final
    /// arbiter: a duplicate insert must surface as `Conflict`.
    async fn insert(&self, user_id: i64, course_id: i64) -> DomainResult<Enrollment>;

    /// Delete the pair, reporting whether a row was actually removed.
    async fn delete(&self, user_id: i64, course_id: i64) -> DomainResult<bool>;
}

/// Resume metadata storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn insert(
        &self,
        hr_id: i64,
        filename: &str,
        file_path: &str,
        status: &str,
    ) -> DomainResult<Resume>;

    async fn list_for_hr(&self, hr_id: i64) -> DomainResult<Vec<Resume>>;
}
