use axum::Router;
use axum::routing::{get, put};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod put;

use get::{get_pending_submissions, get_submissions};
use put::mark_submission;

pub fn submission_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_submissions))
        .route("/pending", get(get_pending_submissions))
        .route("/{submission_id}/mark", put(mark_submission))
}
