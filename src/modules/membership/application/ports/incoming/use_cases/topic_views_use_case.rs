use async_trait::async_trait;
use uuid::Uuid;

use crate::membership::application::ports::outgoing::{
    MemberInfo, TopicRecord, TopicStats, TopicSummary, TopicWithMembers, UserWithTopic,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicViewsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// Read-only projections served to the web layer. `None` means the
/// requested topic or user does not exist.
#[async_trait]
pub trait TopicViewsUseCase: Send + Sync {
    async fn all_topics(&self) -> Result<Vec<TopicSummary>, TopicViewsError>;

    async fn topic_with_members(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<TopicWithMembers>, TopicViewsError>;

    async fn user_with_topic(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserWithTopic>, TopicViewsError>;

    async fn topics_with_no_members(&self) -> Result<Vec<TopicRecord>, TopicViewsError>;

    async fn users_without_topic(&self) -> Result<Vec<MemberInfo>, TopicViewsError>;

    async fn users_in_topic(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<Vec<MemberInfo>>, TopicViewsError>;

    async fn topic_stats(&self, topic_id: Uuid) -> Result<Option<TopicStats>, TopicViewsError>;
}
