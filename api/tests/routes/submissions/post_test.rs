#[cfg(test)]
mod tests {
    use crate::helpers::make_test_app;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::assignment::{Difficulty, Model as AssignmentModel};
    use db::models::submission::Entity as SubmissionEntity;
    use sea_orm::{DatabaseConnection, EntityTrait};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn seed(db: &DatabaseConnection) -> AssignmentModel {
        AssignmentModel::create(
            db,
            "Fourier Series Worksheet",
            "Derive the first four terms",
            "https://img.example.com/fourier.png",
            60,
            Difficulty::Hard,
            "2026-02-01",
            "alice@example.com",
            "Alice",
        )
        .await
        .unwrap()
    }

    fn submit_req(assignment_id: i64, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/api/assignments/{assignment_id}/submit"))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    /// Test Case: Submission is created pending with the assignment snapshot
    #[tokio::test]
    async fn test_submit_assignment_success() {
        let (app, app_state) = make_test_app().await;
        let assignment = seed(app_state.db()).await;

        let body = json!({
            "googleDocsLink": "https://docs.google.com/document/d/abc",
            "userEmail": "student@example.com",
            "userName": "Student",
            "notes": "second attempt"
        });
        let response = app.oneshot(submit_req(assignment.id, &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Submission received successfully");

        let data = &json["data"];
        assert!(data["id"].as_i64().is_some());
        assert_eq!(data["assignmentId"], assignment.id);
        // Snapshot fields are copied from the assignment at submit time.
        assert_eq!(data["title"], "Fourier Series Worksheet");
        assert_eq!(data["marks"], 60);
        assert_eq!(data["status"], "pending");
        assert_eq!(data["notes"], "second attempt");
        assert_eq!(data["obtainedMarks"], Value::Null);
        assert_eq!(data["feedback"], Value::Null);
        assert_eq!(data["markedAt"], Value::Null);
    }

    /// Test Case: Omitted notes default to the empty string
    #[tokio::test]
    async fn test_submit_assignment_notes_default() {
        let (app, app_state) = make_test_app().await;
        let assignment = seed(app_state.db()).await;

        let body = json!({
            "googleDocsLink": "https://docs.google.com/document/d/abc",
            "userEmail": "student@example.com",
            "userName": "Student"
        });
        let response = app.oneshot(submit_req(assignment.id, &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["data"]["notes"], "");
    }

    /// Test Case: Missing fields yield 400 with every field named, no row
    #[tokio::test]
    async fn test_submit_assignment_missing_fields() {
        let (app, app_state) = make_test_app().await;
        let assignment = seed(app_state.db()).await;

        let response = app
            .clone()
            .oneshot(submit_req(assignment.id, &json!({"notes": "late"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        let message = json["message"].as_str().unwrap();
        assert!(message.contains("googleDocsLink is required"));
        assert!(message.contains("userEmail is required"));
        assert!(message.contains("userName is required"));

        let count = SubmissionEntity::find()
            .all(app_state.db())
            .await
            .unwrap()
            .len();
        assert_eq!(count, 0);
    }

    /// Test Case: Submitting against a nonexistent assignment
    #[tokio::test]
    async fn test_submit_assignment_not_found() {
        let (app, _app_state) = make_test_app().await;

        let body = json!({
            "googleDocsLink": "https://docs.google.com/document/d/abc",
            "userEmail": "student@example.com",
            "userName": "Student"
        });
        let response = app.oneshot(submit_req(9999, &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], "Assignment not found");
    }

    /// Test Case: Later assignment edits do not rewrite the snapshot
    #[tokio::test]
    async fn test_submit_snapshot_survives_assignment_update() {
        let (app, app_state) = make_test_app().await;
        let assignment = seed(app_state.db()).await;

        let body = json!({
            "googleDocsLink": "https://docs.google.com/document/d/abc",
            "userEmail": "student@example.com",
            "userName": "Student"
        });
        let response = app
            .clone()
            .oneshot(submit_req(assignment.id, &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let update = json!({
            "title": "Fourier Series Worksheet (revised)",
            "description": "Derive the first six terms",
            "thumbnailUrl": "https://img.example.com/fourier.png",
            "marks": 80,
            "difficulty": "Hard",
            "dueDate": "2026-02-01",
            "userEmail": "alice@example.com",
            "userName": "Alice"
        });
        let req = Request::builder()
            .method("PUT")
            .uri(format!("/api/assignments/{}", assignment.id))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&update).unwrap()))
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let req = Request::builder()
            .method("GET")
            .uri("/api/submissions")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        let submissions = json["data"].as_array().unwrap();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0]["title"], "Fourier Series Worksheet");
        assert_eq!(submissions[0]["marks"], 60);
    }
}
