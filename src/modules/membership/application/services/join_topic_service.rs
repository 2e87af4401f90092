use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    membership::application::ports::{
        incoming::use_cases::{JoinTopicError, JoinTopicUseCase},
        outgoing::{MembershipStore, MembershipStoreError, TopicRecord},
    },
};

#[derive(Debug, Clone)]
pub struct JoinTopicService<S>
where
    S: MembershipStore + Send + Sync,
{
    store: S,
}

impl<S> JoinTopicService<S>
where
    S: MembershipStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> JoinTopicUseCase for JoinTopicService<S>
where
    S: MembershipStore + Send + Sync,
{
    async fn execute(&self, user: UserId, topic_id: Uuid) -> Result<TopicRecord, JoinTopicError> {
        self.store
            .join_topic(user, topic_id)
            .await
            .map_err(|e| match e {
                MembershipStoreError::TopicNotFound => JoinTopicError::TopicNotFound,
                MembershipStoreError::UserNotFound => JoinTopicError::UserNotFound,
                other => JoinTopicError::StoreError(other.to_string()),
            })
    }
}
