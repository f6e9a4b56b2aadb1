//! Request model for submitting against an assignment.

use serde::Deserialize;

use crate::routes::common::require_string;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub google_docs_link: Option<String>,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    pub notes: Option<String>,
}

/// A validated submission body. `notes` defaults to the empty string.
#[derive(Debug)]
pub struct NewSubmission {
    pub google_docs_link: String,
    pub user_email: String,
    pub user_name: String,
    pub notes: String,
}

impl SubmitRequest {
    /// Validates every field, reporting all offending fields at once.
    pub fn validate(&self) -> Result<NewSubmission, Vec<String>> {
        let google_docs_link = require_string(&self.google_docs_link, "googleDocsLink");
        let user_email = require_string(&self.user_email, "userEmail");
        let user_name = require_string(&self.user_name, "userName");

        match (google_docs_link, user_email, user_name) {
            (Ok(google_docs_link), Ok(user_email), Ok(user_name)) => Ok(NewSubmission {
                google_docs_link,
                user_email,
                user_name,
                notes: self.notes.clone().unwrap_or_default(),
            }),
            (google_docs_link, user_email, user_name) => Err([
                google_docs_link.err(),
                user_email.err(),
                user_name.err(),
            ]
            .into_iter()
            .flatten()
            .collect()),
        }
    }
}
