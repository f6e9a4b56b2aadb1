//! Submission response and grading request models.

use db::models::submission::{Model as SubmissionModel, Status};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::routes::common::require_string;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub id: i64,
    pub assignment_id: i64,
    pub title: String,
    pub marks: i32,
    pub google_docs_link: String,
    pub notes: String,
    pub user_email: String,
    pub user_name: String,
    pub status: Status,
    pub submitted_at: String,
    pub obtained_marks: Option<i32>,
    pub feedback: Option<String>,
    pub marked_at: Option<String>,
}

impl From<SubmissionModel> for SubmissionResponse {
    fn from(submission: SubmissionModel) -> Self {
        Self {
            id: submission.id,
            assignment_id: submission.assignment_id,
            title: submission.title,
            marks: submission.marks,
            google_docs_link: submission.google_docs_link,
            notes: submission.notes,
            user_email: submission.user_email,
            user_name: submission.user_name,
            status: submission.status,
            submitted_at: submission.submitted_at.to_rfc3339(),
            obtained_marks: submission.obtained_marks,
            feedback: submission.feedback,
            marked_at: submission.marked_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Body of `PUT /api/submissions/{id}/mark`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkRequest {
    pub user_email: Option<String>,
    pub obtained_marks: Option<Value>,
    pub feedback: Option<String>,
}

/// A validated grade. `feedback` defaults to the empty string.
#[derive(Debug)]
pub struct Grade {
    pub obtained_marks: i32,
    pub feedback: String,
}

impl MarkRequest {
    /// Requires a present, non-empty grader email. Checked before the grade
    /// itself so the peer-grading gate can run first.
    pub fn grader_email(&self) -> Result<String, String> {
        require_string(&self.user_email, "userEmail")
    }

    /// Validates the grade fields: `obtainedMarks` must be a JSON integer
    /// that is zero or greater.
    pub fn validate_grade(&self) -> Result<Grade, String> {
        let obtained_marks = match &self.obtained_marks {
            None => return Err("obtainedMarks is required".into()),
            Some(value) => value
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .ok_or_else(|| "obtainedMarks must be an integer".to_string())?,
        };

        if obtained_marks < 0 {
            return Err("obtainedMarks must be zero or greater".into());
        }

        Ok(Grade {
            obtained_marks,
            feedback: self.feedback.clone().unwrap_or_default(),
        })
    }
}
