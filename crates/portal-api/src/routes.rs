//! API routes.

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::services::ServeDir;

use portal_uploads::{MAX_FILES_PER_BATCH, MAX_FILE_SIZE};

use crate::handlers::{collections, courses, health, index, resumes, users};
use crate::middleware::{cors_layer, request_id, request_logging};
use crate::state::AppState;
use crate::ws::ws_notifications;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route(
            "/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        );

    let course_routes = Router::new()
        .route("/", get(courses::list_courses).post(courses::create_course))
        .route("/user/:identifier", get(courses::list_courses_by_user))
        .route(
            "/user/:identifier/enrollments",
            get(courses::list_user_enrollments),
        )
        .route(
            "/:id",
            get(courses::get_course)
                .put(courses::update_course)
                .delete(courses::delete_course),
        )
        .route(
            "/:id/enroll",
            post(courses::enroll_user).delete(courses::unenroll_user),
        );

    let collection_routes = Router::new()
        .route(
            "/",
            get(collections::list_collections).post(collections::create_collection),
        )
        .route(
            "/user/:identifier",
            get(collections::list_collections_by_user),
        )
        .route(
            "/:id",
            get(collections::get_collection)
                .put(collections::update_collection)
                .delete(collections::delete_collection),
        );

    let resume_routes = Router::new()
        .route("/", get(resumes::list_resumes))
        .route(
            "/upload",
            post(resumes::upload_resumes)
                .layer(DefaultBodyLimit::max(MAX_FILE_SIZE * MAX_FILES_PER_BATCH + 1024 * 1024)),
        );

    let api_routes = Router::new()
        .nest("/users", user_routes)
        .nest("/courses", course_routes)
        .nest("/collections", collection_routes)
        .nest("/resumes", resume_routes)
        .route("/health", get(health::health));

    Router::new()
        .route("/", get(index::index))
        .nest("/api", api_routes)
        .route("/ws", get(ws_notifications))
        // Serve uploaded files like any static directory.
        .nest_service("/uploads", ServeDir::new(&state.config.upload_dir))
        .fallback(route_not_found)
        .layer(from_fn(request_id))
        .layer(from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}

/// Enveloped 404 for unknown routes.
async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "success": false,
            "message": "Route not found",
        })),
    )
}
