//! Enrollment coordination.
//!
//! The only component that writes the enrollment ledger. Every mutation is
//! gated on the course existing and the identifier resolving. The upfront
//! existence checks are fast paths: two concurrent calls can both pass
//! them, so the ledger's `(user_id, course_id)` uniqueness constraint (and
//! the affected-row count on delete) remains the final arbiter.

use std::sync::Arc;

use tracing::debug;

use portal_models::{DomainError, DomainResult, EnrolledCourse, Enrollment, IdentifierHint};

use crate::identifier::IdentifierResolver;
use crate::ports::{CourseStore, EnrollmentStore};

/// Orchestrates resolve → precondition-check → ledger write for
/// enroll/unenroll. Holds no state of its own.
#[derive(Clone)]
pub struct EnrollmentCoordinator {
    courses: Arc<dyn CourseStore>,
    enrollments: Arc<dyn EnrollmentStore>,
    resolver: IdentifierResolver,
}

impl EnrollmentCoordinator {
    pub fn new(
        courses: Arc<dyn CourseStore>,
        enrollments: Arc<dyn EnrollmentStore>,
        resolver: IdentifierResolver,
    ) -> Self {
        Self {
            courses,
            enrollments,
            resolver,
        }
    }

    /// Enroll a user in a course.
    ///
    /// Duplicate requests are an error, not a no-op: a second enroll for
    /// the same pair fails with `Conflict` whether it is caught by the
    /// pre-check or by the ledger's constraint at insert time.
    pub async fn enroll(
        &self,
        course_id: i64,
        identifier: &str,
        hint: Option<IdentifierHint>,
    ) -> DomainResult<Enrollment> {
        self.require_course(course_id).await?;
        let user_id = self.resolver.resolve(identifier, hint).await?;

        if self.enrollments.find(user_id, course_id).await?.is_some() {
            return Err(already_enrolled());
        }

        let enrollment = self.enrollments.insert(user_id, course_id).await?;
        debug!(user_id, course_id, "user enrolled");
        Ok(enrollment)
    }

    /// Unenroll a user from a course.
    ///
    /// Removing a pair that is not enrolled fails with `NotFound`; a
    /// delete that raced and removed nothing reports the same, so callers
    /// get accurate feedback on double-unenroll attempts.
    pub async fn unenroll(
        &self,
        course_id: i64,
        identifier: &str,
        hint: Option<IdentifierHint>,
    ) -> DomainResult<()> {
        self.require_course(course_id).await?;
        let user_id = self.resolver.resolve(identifier, hint).await?;

        if self.enrollments.find(user_id, course_id).await?.is_none() {
            return Err(not_enrolled());
        }

        let removed = self.enrollments.delete(user_id, course_id).await?;
        if !removed {
            return Err(not_enrolled());
        }
        debug!(user_id, course_id, "user unenrolled");
        Ok(())
    }

    /// Every enrollment for the resolved user, most recent first. Zero
    /// enrollments is an empty list; only an unresolvable identifier is an
    /// error here.
    pub async fn list_for_user(
        &self,
        identifier: &str,
        hint: Option<IdentifierHint>,
    ) -> DomainResult<Vec<EnrolledCourse>> {
        let user_id = self.resolver.resolve(identifier, hint).await?;
        self.enrollments.list_for_user(user_id).await
    }

    async fn require_course(&self, course_id: i64) -> DomainResult<()> {
        match self.courses.find_by_id(course_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("Course not found")),
        }
    }
}

fn already_enrolled() -> DomainError {
    DomainError::conflict("User is already enrolled in this course")
}

fn not_enrolled() -> DomainError {
    DomainError::not_found("User is not enrolled in this course")
}
