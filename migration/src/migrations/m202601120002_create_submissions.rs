use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202601120002_create_submissions"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key on assignment_id: existence is checked at submit time
        // only, and deleting an assignment must not cascade to submissions.
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("submissions"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("assignment_id")).big_integer().not_null())
                    .col(ColumnDef::new(Alias::new("title")).string().not_null())
                    .col(ColumnDef::new(Alias::new("marks")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("google_docs_link")).string().not_null())
                    .col(ColumnDef::new(Alias::new("notes")).string().not_null().default(""))
                    .col(ColumnDef::new(Alias::new("user_email")).string().not_null())
                    .col(ColumnDef::new(Alias::new("user_name")).string().not_null())
                    .col(
                        ColumnDef::new(Alias::new("status"))
                            .enumeration(
                                Alias::new("submission_status_enum"),
                                vec![Alias::new("pending"), Alias::new("completed")],
                            )
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("submitted_at")).timestamp().not_null())
                    .col(ColumnDef::new(Alias::new("obtained_marks")).integer().null())
                    .col(ColumnDef::new(Alias::new("feedback")).string().null())
                    .col(ColumnDef::new(Alias::new("marked_at")).timestamp().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("submissions")).to_owned())
            .await
    }
}
