use api::routes::{banner, routes};
use axum::{Router, body::Body, http::Request, response::Response, routing::get};
use std::convert::Infallible;
use tower::ServiceExt;
use tower::util::BoxCloneService;
use util::state::AppState;

pub type TestApp = BoxCloneService<Request<Body>, Response, Infallible>;

/// Builds the full application router against a fresh in-memory database.
///
/// Returns the app as a cloneable service plus the `AppState`, so tests can
/// seed data through the model layer directly.
pub async fn make_test_app() -> (TestApp, AppState) {
    let db = db::test_utils::setup_test_db().await;
    let app_state = AppState::new(db);

    let router = Router::new()
        .route("/", get(banner))
        .nest("/api", routes(app_state.clone()));

    (router.into_service().boxed_clone(), app_state)
}
