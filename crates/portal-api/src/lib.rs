//! Axum HTTP/WS API server.
//!
//! This crate provides:
//! - REST endpoints for users, courses, job collections, and enrollments
//! - Resume upload intake (multipart, HR-only)
//! - The token-authenticated notification WebSocket
//! - Error-to-status mapping and the uniform response envelope

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod hub;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
pub mod ws;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
