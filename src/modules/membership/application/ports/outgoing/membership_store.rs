use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

// Input DTO for proposing a topic
#[derive(Debug, Clone)]
pub struct ProposeTopicData {
    pub creator: UserId,
    pub title: String,
    pub description: String,
}

// A persisted topic row as the store returns it after a write
#[derive(Debug, Clone, Serialize)]
pub struct TopicRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub creator_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MembershipStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,

    #[error("User not found")]
    UserNotFound,
}

/// Transactional writes against the membership relation.
///
/// Every mutating call runs as a single database transaction so that a
/// user's `current_topic_id` always moves in one step. Concurrent calls
/// for the same user serialize on the user row; no reader ever observes
/// a user in two topics or in a half-applied transition.
#[async_trait]
pub trait MembershipStore: Send + Sync {
    /// Create a topic and join its creator to it, evicting the creator
    /// from any topic they were previously in.
    async fn propose_topic(
        &self,
        data: ProposeTopicData,
    ) -> Result<TopicRecord, MembershipStoreError>;

    /// Move the user into `topic_id`, silently replacing any previous
    /// membership. The topic must exist; so must the user.
    async fn join_topic(
        &self,
        user: UserId,
        topic_id: Uuid,
    ) -> Result<TopicRecord, MembershipStoreError>;

    /// Clear the user's membership. Idempotent: a user who is not in a
    /// topic (or does not exist) is a successful no-op.
    async fn leave_topic(&self, user: UserId) -> Result<(), MembershipStoreError>;
}
