#[cfg(test)]
mod tests {
    use crate::helpers::make_test_app;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::assignment::{Difficulty, Model as AssignmentModel};
    use sea_orm::DatabaseConnection;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn seed(db: &DatabaseConnection) -> AssignmentModel {
        AssignmentModel::create(
            db,
            "Vector Calculus Homework",
            "Stokes' theorem exercises",
            "https://img.example.com/vc.png",
            50,
            Difficulty::Medium,
            "2026-02-28",
            "owner@example.com",
            "Owner",
        )
        .await
        .unwrap()
    }

    fn update_body(user_email: &str) -> Value {
        json!({
            "title": "Vector Calculus Homework v2",
            "description": "Now with divergence theorem",
            "thumbnailUrl": "https://img.example.com/vc2.png",
            "marks": 70,
            "difficulty": "Hard",
            "dueDate": "2026-03-15",
            "userEmail": user_email,
            "userName": "Owner"
        })
    }

    fn put_req(id: i64, body: &Value) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri(format!("/api/assignments/{id}"))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    /// Test Case: Owner updates all fields
    #[tokio::test]
    async fn test_update_assignment_success() {
        let (app, app_state) = make_test_app().await;
        let assignment = seed(app_state.db()).await;

        let response = app
            .oneshot(put_req(assignment.id, &update_body("owner@example.com")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Assignment updated successfully");

        let updated = AssignmentModel::get_by_id(app_state.db(), assignment.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "Vector Calculus Homework v2");
        assert_eq!(updated.marks, 70);
        assert_eq!(updated.difficulty, Difficulty::Hard);
        // The owner email is never rewritten.
        assert_eq!(updated.user_email, "owner@example.com");
    }

    /// Test Case: Non-owner gets 403 and the record is untouched
    #[tokio::test]
    async fn test_update_assignment_forbidden() {
        let (app, app_state) = make_test_app().await;
        let assignment = seed(app_state.db()).await;

        let response = app
            .oneshot(put_req(assignment.id, &update_body("intruder@example.com")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "You do not own this assignment");

        let unchanged = AssignmentModel::get_by_id(app_state.db(), assignment.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged.title, "Vector Calculus Homework");
        assert_eq!(unchanged.marks, 50);
    }

    /// Test Case: Missing userEmail is a validation failure
    #[tokio::test]
    async fn test_update_assignment_missing_email() {
        let (app, app_state) = make_test_app().await;
        let assignment = seed(app_state.db()).await;

        let mut body = update_body("owner@example.com");
        body.as_object_mut().unwrap().remove("userEmail");

        let response = app.oneshot(put_req(assignment.id, &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], "userEmail is required");
    }

    /// Test Case: Unknown id
    #[tokio::test]
    async fn test_update_assignment_not_found() {
        let (app, _app_state) = make_test_app().await;

        let response = app
            .oneshot(put_req(9999, &update_body("owner@example.com")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Test Case: Owner passes the auth check but the body fails validation
    #[tokio::test]
    async fn test_update_assignment_invalid_body() {
        let (app, app_state) = make_test_app().await;
        let assignment = seed(app_state.db()).await;

        let mut body = update_body("owner@example.com");
        body.as_object_mut().unwrap().remove("title");
        body["marks"] = json!("70");

        let response = app.oneshot(put_req(assignment.id, &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        let message = json["message"].as_str().unwrap();
        assert!(message.contains("title is required"));
        assert!(message.contains("marks must be an integer"));

        let unchanged = AssignmentModel::get_by_id(app_state.db(), assignment.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged.title, "Vector Calculus Homework");
    }
}
