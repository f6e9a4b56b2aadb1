use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::QueryFilter;
use sea_orm::sea_query::Expr;
use serde::{Deserialize, Serialize};

use super::assignment;

/// Grading state of a submission. Starts `Pending`, moves to `Completed`
/// exactly once via [`Model::mark`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "completed")]
    Completed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Reference to the assignment this answers. Checked for existence at
    /// creation time only; deleting the assignment later does not cascade.
    pub assignment_id: i64,

    /// Snapshot of the assignment's title at submission time.
    pub title: String,
    /// Snapshot of the assignment's marks at submission time.
    pub marks: i32,

    pub google_docs_link: String,
    pub notes: String,

    /// Submitter identity.
    pub user_email: String,
    pub user_name: String,

    pub status: Status,
    pub submitted_at: DateTime<Utc>,

    pub obtained_marks: Option<i32>,
    pub feedback: Option<String>,
    pub marked_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Creates a pending submission against an already-fetched assignment,
    /// copying the assignment's `title` and `marks` as a denormalized
    /// snapshot.
    pub async fn create(
        db: &DbConn,
        assignment: &assignment::Model,
        google_docs_link: &str,
        notes: &str,
        user_email: &str,
        user_name: &str,
    ) -> Result<Model, DbErr> {
        let submission = ActiveModel {
            assignment_id: Set(assignment.id),
            title: Set(assignment.title.clone()),
            marks: Set(assignment.marks),
            google_docs_link: Set(google_docs_link.to_owned()),
            notes: Set(notes.to_owned()),
            user_email: Set(user_email.to_owned()),
            user_name: Set(user_name.to_owned()),
            status: Set(Status::Pending),
            submitted_at: Set(Utc::now()),
            obtained_marks: Set(None),
            feedback: Set(None),
            marked_at: Set(None),
            ..Default::default()
        };

        submission.insert(db).await
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn get_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(db).await
    }

    pub async fn get_pending(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::Status.eq(Status::Pending))
            .all(db)
            .await
    }

    /// Grades a pending submission: records the obtained marks and feedback,
    /// stamps `marked_at` and moves status to completed. The write is
    /// conditional on `status = pending`, so the pending → completed
    /// transition happens at most once; a repeat mark affects zero rows.
    ///
    /// Returns the number of rows affected.
    pub async fn mark(
        db: &DbConn,
        id: i64,
        obtained_marks: i32,
        feedback: &str,
    ) -> Result<u64, DbErr> {
        let result = Entity::update_many()
            .col_expr(Column::Status, Expr::value(Status::Completed))
            .col_expr(Column::ObtainedMarks, Expr::value(obtained_marks))
            .col_expr(Column::Feedback, Expr::value(feedback))
            .col_expr(Column::MarkedAt, Expr::value(Utc::now()))
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(Status::Pending))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }
}
