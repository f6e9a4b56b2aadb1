use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, QueryFilter};
use sea_orm::sea_query::Expr;
use serde::{Deserialize, Serialize};

/// Difficulty rating of an assignment, stored as its display string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Difficulty {
    #[sea_orm(string_value = "Easy")]
    Easy,
    #[sea_orm(string_value = "Medium")]
    Medium,
    #[sea_orm(string_value = "Hard")]
    Hard,
}

impl Difficulty {
    /// Parses a query/body value. Anything other than the three exact
    /// enum strings yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Easy" => Some(Self::Easy),
            "Medium" => Some(Self::Medium),
            "Hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub marks: i32,
    pub difficulty: Difficulty,
    pub due_date: String,

    /// Creator identity and authorization key. Never rewritten after creation.
    pub user_email: String,
    pub user_name: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        title: &str,
        description: &str,
        thumbnail_url: &str,
        marks: i32,
        difficulty: Difficulty,
        due_date: &str,
        user_email: &str,
        user_name: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let assignment = ActiveModel {
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            thumbnail_url: Set(thumbnail_url.to_owned()),
            marks: Set(marks),
            difficulty: Set(difficulty),
            due_date: Set(due_date.to_owned()),
            user_email: Set(user_email.to_owned()),
            user_name: Set(user_name.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        assignment.insert(db).await
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Lists assignments in store-native order, optionally narrowed by an
    /// exact difficulty and a case-insensitive title substring.
    pub async fn find_filtered(
        db: &DbConn,
        difficulty: Option<Difficulty>,
        search: Option<&str>,
    ) -> Result<Vec<Model>, DbErr> {
        let mut condition = Condition::all();

        if let Some(difficulty) = difficulty {
            condition = condition.add(Column::Difficulty.eq(difficulty));
        }
        if let Some(search) = search {
            // LIKE is case-insensitive for ASCII on sqlite.
            condition = condition.add(Column::Title.contains(search));
        }

        Entity::find().filter(condition).all(db).await
    }

    /// Conditional owner-checked update. The ownership predicate is part of
    /// the write's own filter, so a record whose owner changed between check
    /// and write simply matches zero rows. The `user_email` column itself is
    /// never rewritten.
    ///
    /// Returns the number of rows affected.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_owned(
        db: &DbConn,
        id: i64,
        user_email: &str,
        title: &str,
        description: &str,
        thumbnail_url: &str,
        marks: i32,
        difficulty: Difficulty,
        due_date: &str,
        user_name: &str,
    ) -> Result<u64, DbErr> {
        let result = Entity::update_many()
            .col_expr(Column::Title, Expr::value(title))
            .col_expr(Column::Description, Expr::value(description))
            .col_expr(Column::ThumbnailUrl, Expr::value(thumbnail_url))
            .col_expr(Column::Marks, Expr::value(marks))
            .col_expr(Column::Difficulty, Expr::value(difficulty))
            .col_expr(Column::DueDate, Expr::value(due_date))
            .col_expr(Column::UserName, Expr::value(user_name))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::Id.eq(id))
            .filter(Column::UserEmail.eq(user_email))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Conditional owner-checked delete. Returns the number of rows affected.
    pub async fn delete_owned(db: &DbConn, id: i64, user_email: &str) -> Result<u64, DbErr> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserEmail.eq(user_email))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }
}
