//! User CRUD handlers.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use portal_models::{UserChanges, UserDraft};

use crate::error::ApiResult;
use crate::handlers::{parse_id, require_fields, validate_payload};
use crate::response;
use crate::state::AppState;

/// List all users.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Response> {
    let users = state.users.list().await?;
    Ok(response::list(users, "Success"))
}

/// Get a user by id.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_id(&id)?;
    let user = state.users.get(id).await?;
    Ok(response::ok(user, "Success"))
}

/// Create a user.
pub async fn create_user(
    State(state): State<AppState>,
    Json(draft): Json<UserDraft>,
) -> ApiResult<Response> {
    require_fields(&[
        ("name", draft.name.is_some()),
        ("email", draft.email.is_some()),
    ])?;
    validate_payload(&draft)?;

    let user = state.users.create(draft).await?;
    Ok(response::created(user, "User created successfully"))
}

/// Update a user.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(changes): Json<UserChanges>,
) -> ApiResult<Response> {
    let id = parse_id(&id)?;
    validate_payload(&changes)?;

    let user = state.users.update(id, changes).await?;
    Ok(response::ok(user, "User updated successfully"))
}

/// Delete a user and, transitively, their enrollments.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_id(&id)?;
    state.users.delete(id).await?;
    Ok(response::no_data("User deleted successfully"))
}
