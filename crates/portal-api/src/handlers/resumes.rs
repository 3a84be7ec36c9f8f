//! Resume upload handlers (HR-only).

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Response;

use portal_models::{FailedResume, UploadedResume};
use portal_uploads::MAX_FILES_PER_BATCH;

use crate::auth::{AuthUser, Role};
use crate::error::{ApiError, ApiResult};
use crate::response;
use crate::state::AppState;

/// Upload up to 10 resumes as `resumes` multipart fields.
///
/// Per-file failures don't abort the batch: the response reports both the
/// stored and the rejected files, with 207 when any file failed.
pub async fn upload_resumes(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> ApiResult<Response> {
    user.require_role(Role::Hr)?;

    let mut uploaded: Vec<UploadedResume> = Vec::new();
    let mut failed: Vec<FailedResume> = Vec::new();
    let mut seen = 0usize;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("resumes") {
            continue;
        }

        seen += 1;
        if seen > MAX_FILES_PER_BATCH {
            return Err(ApiError::bad_request(format!(
                "Too many files. Maximum is {MAX_FILES_PER_BATCH} per upload"
            )));
        }

        let filename = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().map(String::from);

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                failed.push(FailedResume {
                    filename,
                    error: e.to_string(),
                });
                continue;
            }
        };

        if let Err(e) = state
            .files
            .validate(&filename, content_type.as_deref(), bytes.len())
        {
            failed.push(FailedResume {
                filename,
                error: e.to_string(),
            });
            continue;
        }

        let stored = match state.files.store(&filename, &bytes).await {
            Ok(stored) => stored,
            Err(e) => {
                failed.push(FailedResume {
                    filename,
                    error: e.to_string(),
                });
                continue;
            }
        };

        match state
            .resumes
            .insert(user.id, &stored.filename, &stored.file_path, "uploaded")
            .await
        {
            Ok(resume) => uploaded.push(UploadedResume {
                id: resume.id,
                filename: resume.filename,
                file_path: resume.file_path,
                status: resume.status,
            }),
            Err(e) => failed.push(FailedResume {
                filename: stored.filename,
                error: e.to_string(),
            }),
        }
    }

    if seen == 0 {
        return Err(ApiError::bad_request("No files uploaded"));
    }

    let message = format!("Processed {seen} file(s)");
    let status = if failed.is_empty() {
        StatusCode::OK
    } else {
        StatusCode::MULTI_STATUS
    };
    Ok(response::with_status(
        status,
        serde_json::json!({ "uploaded": uploaded, "failed": failed }),
        message,
    ))
}

/// List the authenticated HR user's resumes.
pub async fn list_resumes(State(state): State<AppState>, user: AuthUser) -> ApiResult<Response> {
    user.require_role(Role::Hr)?;

    let resumes = state.resumes.list_for_hr(user.id).await?;
    Ok(response::list(resumes, "Resumes retrieved successfully"))
}
