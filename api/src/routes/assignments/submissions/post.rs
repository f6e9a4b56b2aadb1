//! Submission creation handler.
//!
//! Submitting copies the assignment's `title` and `marks` onto the new
//! submission as a denormalized snapshot; later edits to the assignment do
//! not flow through.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{assignment::Model as AssignmentModel, submission::Model as SubmissionModel};
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::assignments::submissions::common::SubmitRequest;
use crate::routes::common::JsonBody;
use crate::routes::submissions::common::SubmissionResponse;

/// POST /api/assignments/{assignment_id}/submit
///
/// Records a student's submission against an assignment.
///
/// ### Request Body
/// ```json
/// {
///   "googleDocsLink": "https://docs.google.com/document/d/abc",
///   "userEmail": "student@example.com",
///   "userName": "Student",
///   "notes": "second attempt"
/// }
/// ```
///
/// `notes` is optional and defaults to the empty string. New submissions
/// start with `status = "pending"` and no grade.
///
/// ### Responses
/// - `201 Created` — the stored submission, including its generated `id`.
/// - `400 Bad Request` — message lists every offending field.
/// - `404 Not Found` — the referenced assignment does not exist.
/// - `500 Internal Server Error` — store failure.
pub async fn submit_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
    JsonBody(req): JsonBody<SubmitRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let new = match req.validate() {
        Ok(new) => new,
        Err(errors) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<SubmissionResponse>::error(errors.join(", "))),
            );
        }
    };

    let assignment = match AssignmentModel::get_by_id(db, assignment_id).await {
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
                Json(ApiResponse::error("Failed to create submission")),
            );
        }
    };

    match SubmissionModel::create(
        db,
        &assignment,
        &new.google_docs_link,
        &new.notes,
        &new.user_email,
        &new.user_name,
    )
    .await
    {
        Ok(submission) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                SubmissionResponse::from(submission),
                "Submission received successfully",
            )),
        ),
        Err(err) => {
            tracing::error!("Error creating submission: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to create submission")),
            )
        }
    }
}
