#[cfg(test)]
mod tests {
    use crate::helpers::make_test_app;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::assignment::{Difficulty, Model as AssignmentModel};
    use db::models::submission::Model as SubmissionModel;
    use sea_orm::DatabaseConnection;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn seed(db: &DatabaseConnection) -> (SubmissionModel, SubmissionModel) {
        let assignment = AssignmentModel::create(
            db,
            "Graph Theory Problem Set",
            "Prove the handshake lemma",
            "https://img.example.com/graphs.png",
            40,
            Difficulty::Medium,
            "2026-02-10",
            "alice@example.com",
            "Alice",
        )
        .await
        .unwrap();

        let first = SubmissionModel::create(
            db,
            &assignment,
            "https://docs.google.com/document/d/first",
            "",
            "bob@example.com",
            "Bob",
        )
        .await
        .unwrap();
        let second = SubmissionModel::create(
            db,
            &assignment,
            "https://docs.google.com/document/d/second",
            "",
            "carol@example.com",
            "Carol",
        )
        .await
        .unwrap();

        (first, second)
    }

    async fn list(app: &crate::helpers::app::TestApp, uri: &str) -> Vec<Value> {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        json["data"].as_array().unwrap().clone()
    }

    #[tokio::test]
    async fn test_list_submissions_returns_all() {
        let (app, app_state) = make_test_app().await;
        seed(app_state.db()).await;

        let submissions = list(&app, "/api/submissions").await;
        assert_eq!(submissions.len(), 2);
        assert!(submissions.iter().all(|s| s["status"] == "pending"));
        assert!(submissions.iter().all(|s| s["title"] == "Graph Theory Problem Set"));
    }

    #[tokio::test]
    async fn test_empty_store_lists_are_empty() {
        let (app, _app_state) = make_test_app().await;

        assert!(list(&app, "/api/submissions").await.is_empty());
        assert!(list(&app, "/api/submissions/pending").await.is_empty());
    }

    /// Marking one submission removes it from the pending list but not the
    /// full list.
    #[tokio::test]
    async fn test_pending_list_excludes_completed() {
        let (app, app_state) = make_test_app().await;
        let (first, _second) = seed(app_state.db()).await;

        let marked = SubmissionModel::mark(app_state.db(), first.id, 30, "Solid proof")
            .await
            .unwrap();
        assert_eq!(marked, 1);

        let all = list(&app, "/api/submissions").await;
        assert_eq!(all.len(), 2);

        let pending = list(&app, "/api/submissions/pending").await;
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0]["userEmail"], "carol@example.com");
    }
}
