//! Submission grading handler.
//!
//! Peer-grading gate: a submission's author may not grade their own work.
//! The grading write is conditional on `status = pending`, so the
//! pending → completed transition happens exactly once.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::submission::Model as SubmissionModel;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::JsonBody;
use crate::routes::submissions::common::MarkRequest;

/// PUT /api/submissions/{submission_id}/mark
///
/// Grades a pending submission: records `obtainedMarks` and optional
/// `feedback`, stamps `markedAt`, and moves the status to `completed`.
///
/// ### Request Body
/// ```json
/// {
///   "userEmail": "grader@example.com",
///   "obtainedMarks": 35,
///   "feedback": "Well argued"
/// }
/// ```
///
/// ### Responses
/// - `200 OK` — graded.
/// - `400 Bad Request` — `userEmail` missing, or `obtainedMarks` absent,
///   non-integer, or negative.
/// - `403 Forbidden` — grader email equals the submitter's email.
/// - `404 Not Found` — no submission with that ID, or no pending submission
///   with that ID at write time.
/// - `500 Internal Server Error` — store failure.
pub async fn mark_submission(
    State(app_state): State<AppState>,
    Path(submission_id): Path<i64>,
    JsonBody(req): JsonBody<MarkRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let grader_email = match req.grader_email() {
        Ok(email) => email,
        Err(error) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(error)),
            );
        }
    };

    let submission = match SubmissionModel::get_by_id(db, submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("Submission not found")),
            );
        }
        Err(err) => {
            tracing::error!("Error fetching submission: {:?}", err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to mark submission")),
            );
        }
    };

    if submission.user_email == grader_email {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("You may not grade your own submission")),
        );
    }

    let grade = match req.validate_grade() {
        Ok(grade) => grade,
        Err(error) => {
            return (StatusCode::BAD_REQUEST, Json(ApiResponse::error(error)));
        }
    };

    match SubmissionModel::mark(db, submission_id, grade.obtained_marks, &grade.feedback).await {
        Ok(0) => (
            // No pending submission with this id at write time.
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Submission not found")),
        ),
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Submission marked successfully")),
        ),
        Err(err) => {
            tracing::error!("Error marking submission: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to mark submission")),
            )
        }
    }
}
