//! Assignment listing and fetch handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use db::models::assignment::{Difficulty, Model as AssignmentModel};
use serde::Deserialize;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::assignments::common::AssignmentResponse;

#[derive(Debug, Deserialize)]
pub struct FilterReq {
    pub difficulty: Option<String>,
    pub search: Option<String>,
}

/// GET /api/assignments
///
/// Retrieves assignments in store-native order.
///
/// # Query Parameters
/// - `difficulty`: (Optional) Takes effect only when it is exactly one of
///   `Easy`, `Medium`, `Hard`; any other value is silently ignored.
/// - `search`: (Optional) Case-insensitive substring match against `title`.
///
/// # Returns
/// - `200 OK` with the (possibly filtered) assignment list.
/// - `500 INTERNAL SERVER ERROR` on store failure.
pub async fn get_assignments(
    State(app_state): State<AppState>,
    Query(params): Query<FilterReq>,
) -> impl IntoResponse {
    let db = app_state.db();

    let difficulty = params.difficulty.as_deref().and_then(Difficulty::parse);

    match AssignmentModel::find_filtered(db, difficulty, params.search.as_deref()).await {
        Ok(assignments) => {
            let response: Vec<AssignmentResponse> =
                assignments.into_iter().map(AssignmentResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    response,
                    "Assignments retrieved successfully",
                )),
            )
        }
        Err(err) => {
            tracing::error!("Error fetching assignments: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to retrieve assignments")),
            )
        }
    }
}

/// GET /api/assignments/{assignment_id}
///
/// Retrieves a single assignment by ID.
///
/// # Returns
/// - `200 OK` with the assignment.
/// - `404 NOT FOUND` if no assignment has that ID.
/// - `500 INTERNAL SERVER ERROR` on store failure.
pub async fn get_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match AssignmentModel::get_by_id(db, assignment_id).await {
        Ok(Some(assignment)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                AssignmentResponse::from(assignment),
                "Assignment retrieved successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<AssignmentResponse>::error("Assignment not found")),
        ),
        Err(err) => {
            tracing::error!("Error fetching assignment: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to retrieve assignment")),
            )
        }
    }
}
