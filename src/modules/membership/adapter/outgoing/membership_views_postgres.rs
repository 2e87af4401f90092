use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::membership::application::ports::outgoing::{
    MemberInfo, MembershipViewError, MembershipViews, TopicRecord, TopicStats, TopicSummary,
    TopicWithCreator, TopicWithMembers, UserWithTopic,
};

use super::sea_orm_entity::{Column as TopicColumn, Entity as TopicEntity, Model as TopicModel};

/// Read projections over the membership relation.
///
/// Member sets are derived with reverse lookups on
/// `users.current_topic_id` (indexed), never from a stored collection.
/// Multi-statement views run inside a read transaction so they observe
/// one snapshot, not a half-applied membership move.
#[derive(Debug, Clone)]
pub struct MembershipViewsPostgres {
    db: Arc<DatabaseConnection>,
}

impl MembershipViewsPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> MembershipViewError {
        MembershipViewError::DatabaseError(e.to_string())
    }

    fn member_info(user: &UserModel) -> MemberInfo {
        MemberInfo {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }

    /// Users currently in any topic, as topic_id -> member count.
    async fn member_counts(
        txn: &DatabaseTransaction,
    ) -> Result<HashMap<Uuid, u64>, MembershipViewError> {
        let members: Vec<UserModel> = UserEntity::find()
            .filter(UserColumn::CurrentTopicId.is_not_null())
            .all(txn)
            .await
            .map_err(Self::map_db_err)?;

        let mut counts: HashMap<Uuid, u64> = HashMap::new();
        for member in members {
            if let Some(topic_id) = member.current_topic_id {
                *counts.entry(topic_id).or_insert(0) += 1;
            }
        }

        Ok(counts)
    }

    async fn require_user(
        txn: &DatabaseTransaction,
        user_id: Uuid,
    ) -> Result<UserModel, MembershipViewError> {
        UserEntity::find_by_id(user_id)
            .one(txn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or_else(|| {
                // Foreign keys make a dangling creator reference impossible,
                // so a miss here is data corruption, not a 404.
                MembershipViewError::DatabaseError(format!("referenced user {user_id} missing"))
            })
    }
}

#[async_trait]
impl MembershipViews for MembershipViewsPostgres {
    async fn all_topics(&self) -> Result<Vec<TopicSummary>, MembershipViewError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let topics: Vec<TopicModel> = TopicEntity::find()
            .order_by_desc(TopicColumn::CreatedAt)
            .all(&txn)
            .await
            .map_err(Self::map_db_err)?;

        if topics.is_empty() {
            txn.commit().await.map_err(Self::map_db_err)?;
            return Ok(vec![]);
        }

        let creator_ids: Vec<Uuid> = topics.iter().map(|t| t.creator_id).collect();
        let creators: HashMap<Uuid, String> = UserEntity::find()
            .filter(UserColumn::Id.is_in(creator_ids))
            .all(&txn)
            .await
            .map_err(Self::map_db_err)?
            .into_iter()
            .map(|u| (u.id, u.name))
            .collect();

        let counts = Self::member_counts(&txn).await?;

        txn.commit().await.map_err(Self::map_db_err)?;

        topics
            .into_iter()
            .map(|topic| {
                let creator_name = creators.get(&topic.creator_id).cloned().ok_or_else(|| {
                    MembershipViewError::DatabaseError(format!(
                        "referenced user {} missing",
                        topic.creator_id
                    ))
                })?;

                Ok(TopicSummary {
                    id: topic.id,
                    title: topic.title,
                    description: topic.description,
                    creator_id: topic.creator_id.into(),
                    creator_name,
                    created_at: topic.created_at.into(),
                    member_count: counts.get(&topic.id).copied().unwrap_or(0),
                })
            })
            .collect()
    }

    async fn topic_with_members(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<TopicWithMembers>, MembershipViewError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let topic = match TopicEntity::find_by_id(topic_id)
            .one(&txn)
            .await
            .map_err(Self::map_db_err)?
        {
            Some(topic) => topic,
            None => {
                txn.commit().await.map_err(Self::map_db_err)?;
                return Ok(None);
            }
        };

        let creator = Self::require_user(&txn, topic.creator_id).await?;

        let members: Vec<UserModel> = UserEntity::find()
            .filter(UserColumn::CurrentTopicId.eq(topic_id))
            .all(&txn)
            .await
            .map_err(Self::map_db_err)?;

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(Some(TopicWithMembers {
            id: topic.id,
            title: topic.title,
            description: topic.description,
            created_at: topic.created_at.into(),
            updated_at: topic.updated_at.into(),
            creator: Self::member_info(&creator),
            members: members.iter().map(Self::member_info).collect(),
        }))
    }

    async fn user_with_topic(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserWithTopic>, MembershipViewError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let user = match UserEntity::find_by_id(user_id)
            .one(&txn)
            .await
            .map_err(Self::map_db_err)?
        {
            Some(user) => user,
            None => {
                txn.commit().await.map_err(Self::map_db_err)?;
                return Ok(None);
            }
        };

        let current_topic = match user.current_topic_id {
            Some(topic_id) => {
                let topic = TopicEntity::find_by_id(topic_id)
                    .one(&txn)
                    .await
                    .map_err(Self::map_db_err)?
                    .ok_or_else(|| {
                        MembershipViewError::DatabaseError(format!(
                            "referenced topic {topic_id} missing"
                        ))
                    })?;

                let creator = Self::require_user(&txn, topic.creator_id).await?;

                Some(TopicWithCreator {
                    topic: topic.to_record(),
                    creator_name: creator.name,
                })
            }
            None => None,
        };

        let created_topics: Vec<TopicModel> = TopicEntity::find()
            .filter(TopicColumn::CreatorId.eq(user_id))
            .order_by_desc(TopicColumn::CreatedAt)
            .all(&txn)
            .await
            .map_err(Self::map_db_err)?;

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(Some(UserWithTopic {
            id: user.id,
            name: user.name,
            email: user.email,
            current_topic,
            created_topics: created_topics.iter().map(TopicModel::to_record).collect(),
        }))
    }

    async fn topics_with_no_members(&self) -> Result<Vec<TopicRecord>, MembershipViewError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let topics: Vec<TopicModel> = TopicEntity::find()
            .order_by_desc(TopicColumn::CreatedAt)
            .all(&txn)
            .await
            .map_err(Self::map_db_err)?;

        let counts = Self::member_counts(&txn).await?;

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(topics
            .into_iter()
            .filter(|t| !counts.contains_key(&t.id))
            .map(|t| t.to_record())
            .collect())
    }

    async fn users_without_topic(&self) -> Result<Vec<MemberInfo>, MembershipViewError> {
        let users: Vec<UserModel> = UserEntity::find()
            .filter(UserColumn::CurrentTopicId.is_null())
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(users.iter().map(Self::member_info).collect())
    }

    async fn users_in_topic(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<Vec<MemberInfo>>, MembershipViewError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let topic = TopicEntity::find_by_id(topic_id)
            .one(&txn)
            .await
            .map_err(Self::map_db_err)?;

        if topic.is_none() {
            txn.commit().await.map_err(Self::map_db_err)?;
            return Ok(None);
        }

        let users: Vec<UserModel> = UserEntity::find()
            .filter(UserColumn::CurrentTopicId.eq(topic_id))
            .all(&txn)
            .await
            .map_err(Self::map_db_err)?;

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(Some(users.iter().map(Self::member_info).collect()))
    }

    async fn topic_stats(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<TopicStats>, MembershipViewError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let topic = match TopicEntity::find_by_id(topic_id)
            .one(&txn)
            .await
            .map_err(Self::map_db_err)?
        {
            Some(topic) => topic,
            None => {
                txn.commit().await.map_err(Self::map_db_err)?;
                return Ok(None);
            }
        };

        let creator = Self::require_user(&txn, topic.creator_id).await?;

        let members: Vec<UserModel> = UserEntity::find()
            .filter(UserColumn::CurrentTopicId.eq(topic_id))
            .all(&txn)
            .await
            .map_err(Self::map_db_err)?;

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(Some(TopicStats {
            topic_id: topic.id,
            title: topic.title,
            member_count: members.len() as u64,
            creator_name: creator.name,
            created_at: topic.created_at.into(),
        }))
    }
}
