use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

use super::membership_store::TopicRecord;

/// Topic as shown in the board listing
#[derive(Debug, Clone, Serialize)]
pub struct TopicSummary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub creator_id: UserId,
    pub creator_name: String,
    pub created_at: DateTime<Utc>,
    pub member_count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberInfo {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicWithMembers {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub creator: MemberInfo,
    pub members: Vec<MemberInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicWithCreator {
    pub topic: TopicRecord,
    pub creator_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserWithTopic {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub current_topic: Option<TopicWithCreator>,
    pub created_topics: Vec<TopicRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicStats {
    pub topic_id: Uuid,
    pub title: String,
    pub member_count: u64,
    pub creator_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MembershipViewError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read-only projections over the membership relation.
///
/// Member sets and counts are always derived by reverse lookup on
/// `users.current_topic_id`; nothing here mutates state, and each call
/// reads a consistent snapshot.
#[async_trait]
pub trait MembershipViews: Send + Sync {
    /// All topics, newest first, with creator name and member count.
    async fn all_topics(&self) -> Result<Vec<TopicSummary>, MembershipViewError>;

    /// One topic with its creator and full member list.
    async fn topic_with_members(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<TopicWithMembers>, MembershipViewError>;

    /// One user with their current topic (and its creator) and the
    /// topics they proposed.
    async fn user_with_topic(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserWithTopic>, MembershipViewError>;

    /// Topics whose derived member set is empty.
    async fn topics_with_no_members(&self) -> Result<Vec<TopicRecord>, MembershipViewError>;

    /// Users who are currently in no topic.
    async fn users_without_topic(&self) -> Result<Vec<MemberInfo>, MembershipViewError>;

    /// Members of one topic, or `None` when the topic does not exist.
    async fn users_in_topic(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<Vec<MemberInfo>>, MembershipViewError>;

    /// Aggregated stats for one topic.
    async fn topic_stats(&self, topic_id: Uuid)
        -> Result<Option<TopicStats>, MembershipViewError>;
}
