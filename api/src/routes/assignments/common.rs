//! Assignment request/response models.
//!
//! `AssignmentRequest` deserializes the camelCase wire body with every field
//! optional, then `validate()` either yields a fully-typed [`NewAssignment`]
//! or the list of offending fields. The same body shape serves create and
//! update (update never rewrites the stored owner email).

use db::models::assignment::{Difficulty, Model as AssignmentModel};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::routes::common::{require_integer, require_string};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub marks: Option<Value>,
    pub difficulty: Option<String>,
    pub due_date: Option<String>,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
}

/// A validated assignment body, ready for the model layer.
#[derive(Debug)]
pub struct NewAssignment {
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub marks: i32,
    pub difficulty: Difficulty,
    pub due_date: String,
    pub user_email: String,
    pub user_name: String,
}

fn require_difficulty(value: &Option<String>) -> Result<Difficulty, String> {
    match value.as_deref() {
        None => Err("difficulty is required".into()),
        Some(v) if v.trim().is_empty() => Err("difficulty is required".into()),
        Some(v) => Difficulty::parse(v)
            .ok_or_else(|| "difficulty must be one of Easy, Medium or Hard".into()),
    }
}

impl AssignmentRequest {
    /// Validates every field, reporting all offending fields at once.
    pub fn validate(&self) -> Result<NewAssignment, Vec<String>> {
        let title = require_string(&self.title, "title");
        let description = require_string(&self.description, "description");
        let thumbnail_url = require_string(&self.thumbnail_url, "thumbnailUrl");
        let marks = require_integer(&self.marks, "marks");
        let difficulty = require_difficulty(&self.difficulty);
        let due_date = require_string(&self.due_date, "dueDate");
        let user_email = require_string(&self.user_email, "userEmail");
        let user_name = require_string(&self.user_name, "userName");

        match (
            title,
            description,
            thumbnail_url,
            marks,
            difficulty,
            due_date,
            user_email,
            user_name,
        ) {
            (
                Ok(title),
                Ok(description),
                Ok(thumbnail_url),
                Ok(marks),
                Ok(difficulty),
                Ok(due_date),
                Ok(user_email),
                Ok(user_name),
            ) => Ok(NewAssignment {
                title,
                description,
                thumbnail_url,
                marks,
                difficulty,
                due_date,
                user_email,
                user_name,
            }),
            (title, description, thumbnail_url, marks, difficulty, due_date, user_email, user_name) => {
                Err([
                    title.err(),
                    description.err(),
                    thumbnail_url.err(),
                    marks.err(),
                    difficulty.err(),
                    due_date.err(),
                    user_email.err(),
                    user_name.err(),
                ]
                .into_iter()
                .flatten()
                .collect())
            }
        }
    }
}

/// Body of owner-checked DELETE requests.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAssignmentRequest {
    pub user_email: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub marks: i32,
    pub difficulty: Difficulty,
    pub due_date: String,
    pub user_email: String,
    pub user_name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AssignmentModel> for AssignmentResponse {
    fn from(assignment: AssignmentModel) -> Self {
        Self {
            id: assignment.id,
            title: assignment.title,
            description: assignment.description,
            thumbnail_url: assignment.thumbnail_url,
            marks: assignment.marks,
            difficulty: assignment.difficulty,
            due_date: assignment.due_date,
            user_email: assignment.user_email,
            user_name: assignment.user_name,
            created_at: assignment.created_at.to_rfc3339(),
            updated_at: assignment.updated_at.to_rfc3339(),
        }
    }
}
