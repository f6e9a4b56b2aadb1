//! Assignment deletion handler.
//!
//! Only the assignment's owner (matching `userEmail`) may delete it. The
//! delete is filtered on both ID and owner email, mirroring the update path.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::assignment::Model as AssignmentModel;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::assignments::common::DeleteAssignmentRequest;
use crate::routes::common::JsonBody;

/// DELETE /api/assignments/{assignment_id}
///
/// Deletes an assignment. Requires `userEmail` in the body; the caller must
/// be the stored owner. Existing submissions against the assignment are left
/// untouched.
///
/// ### Responses
/// - `200 OK` — deleted.
/// - `400 Bad Request` — `userEmail` missing.
/// - `403 Forbidden` — caller is not the owner.
/// - `404 Not Found` — no assignment with that ID, or the row no longer
///   matched the ownership predicate at write time.
/// - `500 Internal Server Error` — store failure.
pub async fn delete_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
    JsonBody(req): JsonBody<DeleteAssignmentRequest>,
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

    match AssignmentModel::get_by_id(db, assignment_id).await {
        Ok(Some(assignment)) => {
            if assignment.user_email != user_email {
                return (
                    StatusCode::FORBIDDEN,
                    Json(ApiResponse::error("You do not own this assignment")),
                );
            }
        }
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
                Json(ApiResponse::error("Failed to delete assignment")),
            );
        }
    }

    match AssignmentModel::delete_owned(db, assignment_id, &user_email).await {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Assignment not found")),
        ),
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Assignment deleted successfully")),
        ),
        Err(err) => {
            tracing::error!("Error deleting assignment: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to delete assignment")),
            )
        }
    }
}
