//! Uniform response envelope.
//!
//! Every success response is `{success, message, data, count?}`; `count`
//! accompanies array payloads.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Envelope<T: Serialize> {
    success: bool,
    message: String,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
}

fn envelope<T: Serialize>(
    status: StatusCode,
    data: T,
    message: impl Into<String>,
    count: Option<usize>,
) -> Response {
    (
        status,
        Json(Envelope {
            success: true,
            message: message.into(),
            data,
            count,
        }),
    )
        .into_response()
}

/// 200 with a single payload.
pub fn ok<T: Serialize>(data: T, message: impl Into<String>) -> Response {
    envelope(StatusCode::OK, data, message, None)
}

/// 200 with an array payload and its count.
pub fn list<T: Serialize>(data: Vec<T>, message: impl Into<String>) -> Response {
    let count = data.len();
    envelope(StatusCode::OK, data, message, Some(count))
}

/// 201 for newly created resources.
pub fn created<T: Serialize>(data: T, message: impl Into<String>) -> Response {
    envelope(StatusCode::CREATED, data, message, None)
}

/// 200 with `data: null`.
pub fn no_data(message: impl Into<String>) -> Response {
    envelope(StatusCode::OK, serde_json::Value::Null, message, None)
}

/// Success with an explicit status (e.g. 207 for partial upload batches).
pub fn with_status<T: Serialize>(
    status: StatusCode,
    data: T,
    message: impl Into<String>,
) -> Response {
    envelope(status, data, message, None)
}
