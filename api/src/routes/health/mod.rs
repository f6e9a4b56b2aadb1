use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

use get::health;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}
