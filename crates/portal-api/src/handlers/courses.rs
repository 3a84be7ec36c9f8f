//! Course and enrollment handlers.

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use portal_models::{CourseChanges, CourseDraft, IdentifierHint, RawUserId};

use crate::error::{ApiError, ApiResult};
use crate::handlers::{parse_id, require_fields, ByQuery};
use crate::response;
use crate::state::AppState;

/// List all courses with owner info.
pub async fn list_courses(State(state): State<AppState>) -> ApiResult<Response> {
    let courses = state.courses.list().await?;
    Ok(response::list(courses, "Success"))
}

/// Get a course by id.
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_id(&id)?;
    let course = state.courses.get(id).await?;
    Ok(response::ok(course, "Success"))
}

/// List courses owned by a user, addressed by email or id.
pub async fn list_courses_by_user(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
    Query(query): Query<ByQuery>,
) -> ApiResult<Response> {
    let hint = IdentifierHint::from_param(query.by.as_deref());
    let courses = state.courses.list_for_user(&identifier, hint).await?;
    Ok(response::list(courses, "Success"))
}

/// List a user's enrollments, addressed by email or id.
pub async fn list_user_enrollments(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
    Query(query): Query<ByQuery>,
) -> ApiResult<Response> {
    let hint = IdentifierHint::from_param(query.by.as_deref());
    let enrollments = state.enrollments.list_for_user(&identifier, hint).await?;
    Ok(response::list(enrollments, "Success"))
}

/// Create a course.
pub async fn create_course(
    State(state): State<AppState>,
    Json(draft): Json<CourseDraft>,
) -> ApiResult<Response> {
    require_fields(&[
        ("name", draft.name.is_some()),
        ("description", draft.description.is_some()),
    ])?;

    let course = state.courses.create(draft).await?;
    Ok(response::created(course, "Course created successfully"))
}

/// Update a course.
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(changes): Json<CourseChanges>,
) -> ApiResult<Response> {
    let id = parse_id(&id)?;
    let course = state.courses.update(id, changes).await?;
    Ok(response::ok(course, "Course updated successfully"))
}

/// Delete a course and, transitively, its enrollments.
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_id(&id)?;
    state.courses.delete(id).await?;
    Ok(response::no_data("Course deleted successfully"))
}

/// Enroll/unenroll body: exactly one of `user_email`/`user_id` is needed;
/// email wins when both are present.
#[derive(Debug, Deserialize)]
pub struct EnrollmentRequest {
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub user_id: Option<RawUserId>,
}

impl EnrollmentRequest {
    fn into_identifier(self) -> Result<(String, IdentifierHint), ApiError> {
        match (self.user_email, self.user_id) {
            (Some(email), _) => Ok((email, IdentifierHint::Email)),
            (None, Some(id)) => Ok((id.to_string(), IdentifierHint::Id)),
            (None, None) => Err(ApiError::bad_request(
                "Either user_email or user_id is required",
            )),
        }
    }
}

/// Enroll a user in a course.
pub async fn enroll_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<EnrollmentRequest>,
) -> ApiResult<Response> {
    let course_id = parse_id(&id)?;
    let (identifier, hint) = request.into_identifier()?;

    let enrollment = state
        .enrollments
        .enroll(course_id, &identifier, Some(hint))
        .await?;
    Ok(response::created(
        enrollment,
        "User enrolled in course successfully",
    ))
}

/// Unenroll a user from a course.
pub async fn unenroll_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<EnrollmentRequest>,
) -> ApiResult<Response> {
    let course_id = parse_id(&id)?;
    let (identifier, hint) = request.into_identifier()?;

    state
        .enrollments
        .unenroll(course_id, &identifier, Some(hint))
        .await?;
    Ok(response::no_data("User unenrolled from course successfully"))
}
