use async_trait::async_trait;
use uuid::Uuid;

use crate::membership::application::ports::{
    incoming::use_cases::{TopicViewsError, TopicViewsUseCase},
    outgoing::{
        MemberInfo, MembershipViews, TopicRecord, TopicStats, TopicSummary, TopicWithMembers,
        UserWithTopic,
    },
};

/// Thin pass-through from the incoming query port to the view adapter.
#[derive(Debug, Clone)]
pub struct TopicViewsService<V>
where
    V: MembershipViews + Send + Sync,
{
    views: V,
}

impl<V> TopicViewsService<V>
where
    V: MembershipViews + Send + Sync,
{
    pub fn new(views: V) -> Self {
        Self { views }
    }
}

#[async_trait]
impl<V> TopicViewsUseCase for TopicViewsService<V>
where
    V: MembershipViews + Send + Sync,
{
    async fn all_topics(&self) -> Result<Vec<TopicSummary>, TopicViewsError> {
        self.views
            .all_topics()
            .await
            .map_err(|e| TopicViewsError::QueryError(e.to_string()))
    }

    async fn topic_with_members(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<TopicWithMembers>, TopicViewsError> {
        self.views
            .topic_with_members(topic_id)
            .await
            .map_err(|e| TopicViewsError::QueryError(e.to_string()))
    }

    async fn user_with_topic(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserWithTopic>, TopicViewsError> {
        self.views
            .user_with_topic(user_id)
            .await
            .map_err(|e| TopicViewsError::QueryError(e.to_string()))
    }

    async fn topics_with_no_members(&self) -> Result<Vec<TopicRecord>, TopicViewsError> {
        self.views
            .topics_with_no_members()
            .await
            .map_err(|e| TopicViewsError::QueryError(e.to_string()))
    }

    async fn users_without_topic(&self) -> Result<Vec<MemberInfo>, TopicViewsError> {
        self.views
            .users_without_topic()
            .await
            .map_err(|e| TopicViewsError::QueryError(e.to_string()))
    }

    async fn users_in_topic(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<Vec<MemberInfo>>, TopicViewsError> {
        self.views
            .users_in_topic(topic_id)
            .await
            .map_err(|e| TopicViewsError::QueryError(e.to_string()))
    }

    async fn topic_stats(&self, topic_id: Uuid) -> Result<Option<TopicStats>, TopicViewsError> {
        self.views
            .topic_stats(topic_id)
            .await
            .map_err(|e| TopicViewsError::QueryError(e.to_string()))
    }
}
