//! Submission listing handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use db::models::submission::Model as SubmissionModel;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::submissions::common::SubmissionResponse;

/// GET /api/submissions
///
/// Retrieves every submission, regardless of status.
pub async fn get_submissions(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    match SubmissionModel::get_all(db).await {
        Ok(submissions) => {
            let response: Vec<SubmissionResponse> =
                submissions.into_iter().map(SubmissionResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    response,
                    "Submissions retrieved successfully",
                )),
            )
        }
        Err(err) => {
            tracing::error!("Error fetching submissions: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to retrieve submissions")),
            )
        }
    }
}

/// GET /api/submissions/pending
///
/// Retrieves only submissions still awaiting a grade.
pub async fn get_pending_submissions(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    match SubmissionModel::get_pending(db).await {
        Ok(submissions) => {
            let response: Vec<SubmissionResponse> =
                submissions.into_iter().map(SubmissionResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    response,
                    "Pending submissions retrieved successfully",
                )),
            )
        }
        Err(err) => {
            tracing::error!("Error fetching pending submissions: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to retrieve pending submissions")),
            )
        }
    }
}
