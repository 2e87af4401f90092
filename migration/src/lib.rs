pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users_table;
mod m20260301_000002_create_topics_table;
mod m20260301_000003_add_current_topic_fk;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users_table::Migration),
            Box::new(m20260301_000002_create_topics_table::Migration),
            Box::new(m20260301_000003_add_current_topic_fk::Migration),
        ]
    }
}
