//! Assignment creation handler.
//!
//! Provides the `POST /api/assignments` endpoint. Responses follow the
//! standard `ApiResponse` format.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use db::models::assignment::Model as AssignmentModel;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::assignments::common::{AssignmentRequest, AssignmentResponse};
use crate::routes::common::JsonBody;

/// POST /api/assignments
///
/// Creates a new assignment owned by the supplied `userEmail`.
///
/// ### Request Body
/// ```json
/// {
///   "title": "Vector Calculus Homework",
///   "description": "Stokes' theorem exercises",
///   "thumbnailUrl": "https://img.example.com/vc.png",
///   "marks": 50,
///   "difficulty": "Medium",
///   "dueDate": "2026-02-28",
///   "userEmail": "owner@example.com",
///   "userName": "Owner"
/// }
/// ```
///
/// All eight fields are required; `marks` must be a JSON integer and
/// `difficulty` one of `Easy`, `Medium`, `Hard`. A validation failure never
/// reaches the store.
///
/// ### Responses
/// - `201 Created` — the stored assignment, including its generated `id`.
/// - `400 Bad Request` — message lists every offending field.
/// - `500 Internal Server Error` — store failure.
pub async fn create_assignment(
    State(app_state): State<AppState>,
    JsonBody(req): JsonBody<AssignmentRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let new = match req.validate() {
        Ok(new) => new,
        Err(errors) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<AssignmentResponse>::error(errors.join(", "))),
            );
        }
    };

    match AssignmentModel::create(
        db,
        &new.title,
        &new.description,
        &new.thumbnail_url,
        new.marks,
        new.difficulty,
        &new.due_date,
        &new.user_email,
        &new.user_name,
    )
    .await
    {
        Ok(assignment) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                AssignmentResponse::from(assignment),
                "Assignment created successfully",
            )),
        ),
        Err(err) => {
            tracing::error!("Error creating assignment: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to create assignment")),
            )
        }
    }
}
