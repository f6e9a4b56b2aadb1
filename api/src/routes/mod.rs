//! HTTP route entry point for `/api/...`.
//!
//! This module defines all HTTP entry points under the `/api` namespace.
//! Routes are organized by resource:
//! - `/health` → Health check endpoint
//! - `/assignments` → Assignment CRUD plus the per-assignment submit endpoint
//! - `/submissions` → Submission listing and grading

use crate::routes::{
    assignments::assignment_routes, health::health_routes, submissions::submission_routes,
};
use axum::Router;
use util::state::AppState;

pub mod assignments;
pub mod common;
pub mod health;
pub mod submissions;

/// Plain-text banner served at the server root, outside the `/api` namespace.
pub async fn banner() -> &'static str {
    "Assignment Hub is up and running"
}

/// Builds the complete application router for all `/api` HTTP endpoints.
///
/// The returned router carries its `AppState` (shared database handle)
/// already applied, so it can be nested into the top-level router in `main`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/assignments", assignment_routes())
        .nest("/submissions", submission_routes())
        .with_state(app_state)
}
