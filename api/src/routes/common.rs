//! Request-body plumbing shared by the route groups: the [`JsonBody`]
//! extractor and the field-level validation helpers used by each group's
//! `common.rs` request types.
//!
//! Requests deserialize every field as an `Option` (numbers as raw JSON
//! values) and validate explicitly, so a bad field produces a `400` naming
//! the field instead of a generic body-rejection error.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;

use crate::response::ApiResponse;

/// `axum::Json` with its rejection mapped into the standard envelope as a
/// `400 Bad Request`. A missing body, a wrong content type, malformed JSON,
/// and a wrong-typed field all surface the same way as validation failures.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ApiResponse<()>>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(rejection.body_text())),
            )),
        }
    }
}

/// Requires a present, non-empty string field.
pub fn require_string(value: &Option<String>, field: &str) -> Result<String, String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.clone()),
        _ => Err(format!("{field} is required")),
    }
}

/// Requires a present JSON integer that fits in `i32`.
pub fn require_integer(value: &Option<Value>, field: &str) -> Result<i32, String> {
    match value {
        None => Err(format!("{field} is required")),
        Some(v) => v
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| format!("{field} must be an integer")),
    }
}
