use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::membership::application::ports::outgoing::TopicRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub title: String,

    pub description: String,

    pub creator_id: Uuid,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> TopicRecord {
        TopicRecord {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            creator_id: UserId::from(self.creator_id),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::CreatorId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    Creator,
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}
