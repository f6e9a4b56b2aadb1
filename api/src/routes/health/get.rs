use crate::response::ApiResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};

/// GET /api/health
///
/// Liveness probe. Always returns `200 OK` with the standard envelope.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::success("OK", "Health check passed")),
    )
}
