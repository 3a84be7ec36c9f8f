//! Course catalogue service.

use std::sync::Arc;

use tracing::debug;

use portal_models::{Course, CourseChanges, CourseDraft, DomainError, DomainResult, IdentifierHint};

use crate::identifier::IdentifierResolver;
use crate::ports::CourseStore;

#[derive(Clone)]
pub struct CourseService {
    courses: Arc<dyn CourseStore>,
    resolver: IdentifierResolver,
}

impl CourseService {
    pub fn new(courses: Arc<dyn CourseStore>, resolver: IdentifierResolver) -> Self {
        Self { courses, resolver }
    }

    pub async fn list(&self) -> DomainResult<Vec<Course>> {
        self.courses.find_all().await
    }

    pub async fn get(&self, id: i64) -> DomainResult<Course> {
        self.courses
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Course not found"))
    }

    /// Courses owned by the user the identifier resolves to.
    pub async fn list_for_user(
        &self,
        identifier: &str,
        hint: Option<IdentifierHint>,
    ) -> DomainResult<Vec<Course>> {
        let user_id = self.resolver.resolve(identifier, hint).await?;
        self.courses.find_by_owner(user_id).await
    }

    /// Create a course. An owner email is resolved to an id when no
    /// explicit `user_id` was given.
    pub async fn create(&self, draft: CourseDraft) -> DomainResult<Course> {
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

        let course = self.courses.insert(&name, &description, owner).await?;
        debug!(course_id = course.id, "course created");
        Ok(course)
    }

    /// Update a course, merging absent fields with current values.
    pub async fn update(&self, id: i64, changes: CourseChanges) -> DomainResult<Course> {
        let current = self.get(id).await?;

        let name = changes.name.unwrap_or(current.name);
        let description = changes.description.unwrap_or(current.description);
        let user_id = changes.user_id.or(current.user_id);
        self.courses.update(id, &name, &description, user_id).await
    }

    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.get(id).await?;
        self.courses.delete(id).await?;
        debug!(course_id = id, "course deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockCourseStore, MockUserStore};
    use chrono::Utc;
    use mockall::predicate::eq;
    use portal_models::User;

    fn course(id: i64, user_id: Option<i64>) -> Course {
        Course {
            id,
            name: "Rust 101".to_string(),
            description: "Intro".to_string(),
            user_id,
            created_at: Utc::now(),
            user_name: None,
            user_email: None,
        }
    }

    fn service(courses: MockCourseStore, users: MockUserStore) -> CourseService {
        CourseService::new(
            Arc::new(courses),
            IdentifierResolver::new(Arc::new(users)),
        )
    }

    #[tokio::test]
    async fn test_create_requires_name_and_description() {
        let svc = service(MockCourseStore::new(), MockUserStore::new());
        let err = svc
            .create(CourseDraft {
                name: Some("Rust 101".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_argument("Name and description are required")
        );
    }

    #[tokio::test]
    async fn test_create_resolves_owner_email() {
        let mut users = MockUserStore::new();
        users
            .expect_find_by_email()
            .with(eq("alice@x.com"))
            .returning(|_| {
                Ok(Some(User {
                    id: 7,
                    name: "Alice".to_string(),
                    email: "alice@x.com".to_string(),
                    age: None,
                    created_at: Utc::now(),
                }))
            });

        let mut courses = MockCourseStore::new();
        courses
            .expect_insert()
            .withf(|_, _, user_id| *user_id == Some(7))
            .returning(|name, description, user_id| {
                Ok(Course {
                    id: 3,
                    name: name.to_string(),
                    description: description.to_string(),
                    user_id,
                    created_at: Utc::now(),
                    user_name: None,
                    user_email: None,
                })
            });

        let svc = service(courses, users);
        let created = svc
            .create(CourseDraft {
                name: Some("Rust 101".to_string()),
                description: Some("Intro".to_string()),
                user_email: Some("alice@x.com".to_string()),
                user_id: None,
            })
            .await
            .unwrap();
        assert_eq!(created.user_id, Some(7));
    }

    #[tokio::test]
    async fn test_create_explicit_user_id_wins_over_email() {
        // No user lookup expected when user_id is present.
        let mut courses = MockCourseStore::new();
        courses
            .expect_insert()
            .withf(|_, _, user_id| *user_id == Some(9))
            .returning(|name, description, user_id| {
                Ok(Course {
                    id: 4,
                    name: name.to_string(),
                    description: description.to_string(),
                    user_id,
                    created_at: Utc::now(),
                    user_name: None,
                    user_email: None,
                })
            });

        let svc = service(courses, MockUserStore::new());
        let created = svc
            .create(CourseDraft {
                name: Some("Go 101".to_string()),
                description: Some("Intro".to_string()),
                user_id: Some(9),
                user_email: Some("alice@x.com".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(created.user_id, Some(9));
    }

    #[tokio::test]
    async fn test_update_keeps_owner_when_absent() {
        let mut courses = MockCourseStore::new();
        courses
            .expect_find_by_id()
            .returning(|id| Ok(Some(course(id, Some(7)))));
        courses
            .expect_update()
            .withf(|_, name, _, user_id| name == "Renamed" && *user_id == Some(7))
            .returning(|id, name, description, user_id| {
                Ok(Course {
                    id,
                    name: name.to_string(),
                    description: description.to_string(),
                    user_id,
                    created_at: Utc::now(),
                    user_name: None,
                    user_email: None,
                })
            });

        let svc = service(courses, MockUserStore::new());
        let updated = svc
            .update(
                3,
                CourseChanges {
                    name: Some("Renamed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.user_id, Some(7));
    }

    #[tokio::test]
    async fn test_get_missing_course_is_not_found() {
        let mut courses = MockCourseStore::new();
        courses.expect_find_by_id().returning(|_| Ok(None));

        let svc = service(courses, MockUserStore::new());
        let err = svc.get(42).await.unwrap_err();
        assert_eq!(err, DomainError::not_found("Course not found"));
    }
}
