use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// users.current_topic_id and topics.creator_id reference each other, so this
// foreign key can only be added once both tables exist.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Deleting a topic evicts its members back to "no topic"
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE users
                ADD CONSTRAINT fk_users_current_topic_id
                FOREIGN KEY (current_topic_id)
                REFERENCES topics (id)
                ON DELETE SET NULL
                ON UPDATE CASCADE;
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
                ALTER TABLE users
                DROP CONSTRAINT IF EXISTS fk_users_current_topic_id;
                "#,
            )
            .await?;

        Ok(())
    }
}
