use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;

use crate::auth::application::ports::outgoing::{
    CreateUserData, HashError, PasswordHasher, UserRecord, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("Email is already registered")]
    EmailAlreadyRegistered,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput) -> Result<UserRecord, RegisterUserError>;
}

pub struct RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self { repository, hasher }
    }

    fn validate(input: &RegisterUserInput) -> Result<(), RegisterUserError> {
        if EmailAddress::from_str(input.email.trim()).is_err() {
            return Err(RegisterUserError::InvalidEmail(
                "Not a valid email address".to_string(),
            ));
        }

        if input.name.trim().is_empty() {
            return Err(RegisterUserError::InvalidName(
                "Name cannot be empty".to_string(),
            ));
        }

        if input.password.len() < 8 {
            return Err(RegisterUserError::InvalidPassword(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: RegisterUserInput) -> Result<UserRecord, RegisterUserError> {
        Self::validate(&input)?;

        let password_hash = self
            .hasher
            .hash_password(&input.password)
            .await
            .map_err(|e: HashError| RegisterUserError::RepositoryError(e.to_string()))?;

        let data = CreateUserData {
            email: input.email.trim().to_lowercase(),
            name: input.name.trim().to_string(),
            password_hash,
        };

        self.repository.create_user(data).await.map_err(|e| match e {
            UserRepositoryError::EmailAlreadyRegistered => {
                RegisterUserError::EmailAlreadyRegistered
            }
            other => RegisterUserError::RepositoryError(other.to_string()),
        })
    }
}
