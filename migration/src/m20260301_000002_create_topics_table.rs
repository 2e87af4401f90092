use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Topics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Topics::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Topics::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Topics::Description).text().not_null())
                    .col(ColumnDef::new(Topics::CreatorId).uuid().not_null())
                    .col(
                        ColumnDef::new(Topics::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Topics::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Removing a user removes the topics they proposed
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_topics_creator_id")
                            .from(Topics::Table, Topics::CreatorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Authorship lookups ("topics I created")
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_topics_creator_id
                ON topics (creator_id);
                "#,
            )
            .await?;

        // Listing is always newest-first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_topics_created_at
                ON topics (created_at);
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger (shared function from users migration)
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_topics_updated_at
                BEFORE UPDATE ON topics
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_topics_updated_at ON topics;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_topics_creator_id;
                DROP INDEX IF EXISTS idx_topics_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Topics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
    Title,
    Description,
    CreatorId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
