use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

// Input DTO for creating a user
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

// Essential user information returned after a write
#[derive(Debug, Clone, Serialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Email is already registered")]
    EmailAlreadyRegistered,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserRecord, UserRepositoryError>;
}
