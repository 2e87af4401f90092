use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Read-only DTO for user lookups (credential checks at login)
#[derive(Debug, Clone)]
pub struct UserQueryResult {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub current_topic_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError>;
}
