//! Job collection handlers.

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;

use portal_models::{CollectionChanges, CollectionDraft, IdentifierHint};

use crate::error::ApiResult;
use crate::handlers::{parse_id, require_fields, ByQuery};
use crate::response;
use crate::state::AppState;

pub async fn list_collections(State(state): State<AppState>) -> ApiResult<Response> {
    let collections = state.collections.list().await?;
    Ok(response::list(collections, "Success"))
}

pub async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_id(&id)?;
    let collection = state.collections.get(id).await?;
    Ok(response::ok(collection, "Success"))
}

pub async fn list_collections_by_user(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
    Query(query): Query<ByQuery>,
) -> ApiResult<Response> {
    let hint = IdentifierHint::from_param(query.by.as_deref());
    let collections = state.collections.list_for_user(&identifier, hint).await?;
    Ok(response::list(collections, "Success"))
}

pub async fn create_collection(
    State(state): State<AppState>,
    Json(draft): Json<CollectionDraft>,
) -> ApiResult<Response> {
    require_fields(&[
        ("name", draft.name.is_some()),
        ("description", draft.description.is_some()),
    ])?;

    let collection = state.collections.create(draft).await?;
    Ok(response::created(
        collection,
        "Job collection created successfully",
    ))
}

pub async fn update_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(changes): Json<CollectionChanges>,
) -> ApiResult<Response> {
    let id = parse_id(&id)?;
    let collection = state.collections.update(id, changes).await?;
    Ok(response::ok(collection, "Job collection updated successfully"))
}

pub async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_id(&id)?;
    state.collections.delete(id).await?;
    Ok(response::no_data("Job collection deleted successfully"))
}
