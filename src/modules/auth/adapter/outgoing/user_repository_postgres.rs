use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    CreateUserData, UserRecord, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Model as UserModel};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_record(model: UserModel) -> UserRecord {
        UserRecord {
            id: model.id,
            email: model.email,
            name: model.name,
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserRecord, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            name: Set(data.name),
            password_hash: Set(data.password_hash),
            current_topic_id: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return UserRepositoryError::EmailAlreadyRegistered;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(Self::map_to_record(inserted))
    }
}
