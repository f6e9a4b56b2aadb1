use axum::Router;
use axum::routing::{delete, get, post, put};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;
pub mod submissions;

use delete::delete_assignment;
use get::{get_assignment, get_assignments};
use post::create_assignment;
use put::edit_assignment;
use submissions::post::submit_assignment;

pub fn assignment_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_assignment))
        .route("/", get(get_assignments))
        .route("/{assignment_id}", get(get_assignment))
        .route("/{assignment_id}", put(edit_assignment))
        .route("/{assignment_id}", delete(delete_assignment))
        .route("/{assignment_id}/submit", post(submit_assignment))
}
