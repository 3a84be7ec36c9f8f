//! Health check handler.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub timestamp: String,
    pub socket: String,
}

/// Health check with a database connectivity probe.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_connected = portal_db::ping(&state.pool).await;
    Json(HealthResponse {
        status: "OK".to_string(),
        database: if db_connected {
            "Connected"
        } else {
            "Disconnected"
        }
        .to_string(),
        timestamp: Utc::now().to_rfc3339(),
        socket: "Active".to_string(),
    })
}
