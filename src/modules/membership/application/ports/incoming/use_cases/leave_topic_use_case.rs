use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LeaveTopicError {
    #[error("Store error: {0}")]
    StoreError(String),
}

/// Clear the acting user's membership. Idempotent: leaving with no
/// current topic succeeds and changes nothing.
#[async_trait]
pub trait LeaveTopicUseCase: Send + Sync {
    async fn execute(&self, user: UserId) -> Result<(), LeaveTopicError>;
}
