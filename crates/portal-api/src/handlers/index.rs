//! API index.

use axum::Json;

/// Describe the available endpoints.
pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "HR Portal API is running!",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "users": {
                "getAll": "GET /api/users",
                "getById": "GET /api/users/:id",
                "create": "POST /api/users",
                "update": "PUT /api/users/:id",
                "delete": "DELETE /api/users/:id"
            },
            "courses": {
                "getAll": "GET /api/courses",
                "getById": "GET /api/courses/:id",
                "getByUser": "GET /api/courses/user/:identifier?by=email|id",
                "enrollments": "GET /api/courses/user/:identifier/enrollments",
                "create": "POST /api/courses",
                "update": "PUT /api/courses/:id",
                "delete": "DELETE /api/courses/:id",
                "enroll": "POST /api/courses/:id/enroll",
                "unenroll": "DELETE /api/courses/:id/enroll"
            },
            "collections": {
                "getAll": "GET /api/collections",
                "getById": "GET /api/collections/:id",
                "getByUser": "GET /api/collections/user/:identifier",
                "create": "POST /api/collections",
                "update": "PUT /api/collections/:id",
                "delete": "DELETE /api/collections/:id"
            },
            "resumes": {
                "upload": "POST /api/resumes/upload (HR only)",
                "getAll": "GET /api/resumes (HR only)"
            },
            "health": "GET /api/health",
            "notifications": "GET /ws"
        }
    }))
}
