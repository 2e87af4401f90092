use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    membership::application::ports::outgoing::TopicRecord,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum JoinTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Store error: {0}")]
    StoreError(String),
}

/// Move the acting user into a topic. Joining implicitly leaves any
/// previous topic; there is no separate leave step.
#[async_trait]
pub trait JoinTopicUseCase: Send + Sync {
    async fn execute(&self, user: UserId, topic_id: Uuid) -> Result<TopicRecord, JoinTopicError>;
}
