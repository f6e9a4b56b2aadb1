//! Assignment update handler.
//!
//! Only the assignment's owner (matching `userEmail`) may update it. The
//! ownership predicate is part of the update's own filter, so the
//! check-then-act sequence cannot authorize a stale write.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::assignment::Model as AssignmentModel;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::assignments::common::AssignmentRequest;
use crate::routes::common::JsonBody;

/// PUT /api/assignments/{assignment_id}
///
/// Replaces an assignment's fields. Requires `userEmail` in the body; the
/// caller must be the stored owner. The owner email column itself is never
/// rewritten.
///
/// ### Responses
/// - `200 OK` — updated.
/// - `400 Bad Request` — `userEmail` missing, or field validation failed
///   (message lists every offending field).
/// - `403 Forbidden` — caller is not the owner.
/// - `404 Not Found` — no assignment with that ID, or the row no longer
///   matched the ownership predicate at write time.
/// - `500 Internal Server Error` — store failure.
pub async fn edit_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
    JsonBody(req): JsonBody<AssignmentRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let user_email = match req.user_email.as_deref() {
        Some(email) if !email.trim().is_empty() => email.to_owned(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error("userEmail is required")),
            );
        }
    };

    let existing = match AssignmentModel::get_by_id(db, assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("Assignment not found")),
            );
        }
        Err(err) => {
            tracing::error!("Error fetching assignment: {:?}", err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to update assignment")),
            );
        }
    };

    // Authorization is checked against the stored owner, never the body.
    if existing.user_email != user_email {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("You do not own this assignment")),
        );
    }

    let new = match req.validate() {
        Ok(new) => new,
        Err(errors) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(errors.join(", "))),
            );
        }
    };

    match AssignmentModel::update_owned(
        db,
        assignment_id,
        &user_email,
        &new.title,
        &new.description,
        &new.thumbnail_url,
        new.marks,
        new.difficulty,
        &new.due_date,
        &new.user_name,
    )
    .await
    {
        Ok(0) => (
            // The row stopped matching between the read and the write.
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Assignment not found")),
        ),
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Assignment updated successfully")),
        ),
        Err(err) => {
            tracing::error!("Error updating assignment: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to update assignment")),
            )
        }
    }
}
