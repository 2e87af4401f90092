use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait, Value,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use crate::auth::application::domain::entities::UserId;
use crate::membership::application::ports::outgoing::{
    MembershipStore, MembershipStoreError, ProposeTopicData, TopicRecord,
};

use super::sea_orm_entity::{
    ActiveModel as TopicActiveModel, Entity as TopicEntity, Model as TopicModel,
};

/// Transactional writes for the single-topic membership rule.
///
/// Each operation commits the whole create/update pair (or update alone)
/// or nothing, so the user's `current_topic_id` never tears under
/// concurrent calls. All mutual exclusion lives in the database; this
/// adapter holds no locks of its own.
#[derive(Debug, Clone)]
pub struct MembershipStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl MembershipStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> MembershipStoreError {
        MembershipStoreError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl MembershipStore for MembershipStorePostgres {
    async fn propose_topic(
        &self,
        data: ProposeTopicData,
    ) -> Result<TopicRecord, MembershipStoreError> {
        let creator_uuid: Uuid = data.creator.into();
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        // The proposer must exist; the row is also what we update below.
        let user = match UserEntity::find_by_id(creator_uuid).one(&txn).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                let _ = txn.rollback().await;
                return Err(MembershipStoreError::UserNotFound);
            }
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        let active = TopicActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            creator_id: Set(creator_uuid),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted: TopicModel = match active.insert(&txn).await {
            Ok(model) => model,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        // Auto-join: overwrite whatever topic the proposer was in before.
        let mut active_user: UserActiveModel = user.into();
        active_user.current_topic_id = Set(Some(inserted.id));

        if let Err(e) = active_user.update(&txn).await {
            let _ = txn.rollback().await;
            return Err(Self::map_db_err(e));
        }

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(inserted.to_record())
    }

    async fn join_topic(
        &self,
        user: UserId,
        topic_id: Uuid,
    ) -> Result<TopicRecord, MembershipStoreError> {
        let user_uuid: Uuid = user.into();
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let topic = match TopicEntity::find_by_id(topic_id).one(&txn).await {
            Ok(Some(topic)) => topic,
            Ok(None) => {
                let _ = txn.rollback().await;
                return Err(MembershipStoreError::TopicNotFound);
            }
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        // One-step replacement of any previous membership. Zero rows
        // means the acting user has no row at all.
        let result = UserEntity::update_many()
            .col_expr(UserColumn::CurrentTopicId, Expr::value(topic_id))
            .col_expr(
                UserColumn::UpdatedAt,
                Expr::value(chrono::Utc::now().fixed_offset()),
            )
            .filter(UserColumn::Id.eq(user_uuid))
            .exec(&txn)
            .await;

        match result {
            Ok(res) if res.rows_affected == 0 => {
                let _ = txn.rollback().await;
                Err(MembershipStoreError::UserNotFound)
            }
            Ok(_) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(topic.to_record())
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(Self::map_db_err(e))
            }
        }
    }

    async fn leave_topic(&self, user: UserId) -> Result<(), MembershipStoreError> {
        let user_uuid: Uuid = user.into();

        // Single statement, unconditional: leaving with no topic (or no
        // row) is a successful no-op.
        UserEntity::update_many()
            .col_expr(UserColumn::CurrentTopicId, Expr::value(Value::Uuid(None)))
            .col_expr(
                UserColumn::UpdatedAt,
                Expr::value(chrono::Utc::now().fixed_offset()),
            )
            .filter(UserColumn::Id.eq(user_uuid))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(())
    }
}
