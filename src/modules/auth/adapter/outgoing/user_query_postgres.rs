use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError, UserQueryResult};

use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_result(model: UserModel) -> UserQueryResult {
        UserQueryResult {
            id: model.id,
            email: model.email,
            name: model.name,
            password_hash: model.password_hash,
            current_topic_id: model.current_topic_id,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        let model = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Self::map_to_result))
    }
}
