use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery, UserQueryError,
};

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginUserInfo {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginUserResponse {
    pub access_token: String,
    pub user: LoginUserInfo,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    // Wrong email and wrong password are indistinguishable on purpose
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

pub struct LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    user_query: Q,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        user_query: Q,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            user_query,
            hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let user = self
            .user_query
            .find_by_email(request.email.trim())
            .await
            .map_err(|e: UserQueryError| LoginError::RepositoryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let verified = self
            .hasher
            .verify_password(&request.password, &user.password_hash)
            .await
            .map_err(|_| LoginError::InvalidCredentials)?;

        if !verified {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id)
            .map_err(|e| LoginError::TokenError(e.to_string()))?;

        Ok(LoginUserResponse {
            access_token,
            user: LoginUserInfo {
                id: user.id,
                email: user.email,
                name: user.name,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::auth::application::ports::outgoing::{
        HashError, TokenClaims, TokenError, UserQueryResult,
    };

    // ──────────────────────────────────────────────────────────
    // Mocks
    // ──────────────────────────────────────────────────────────

    #[derive(Clone)]
    struct MockUserQuery {
        result: Result<Option<UserQueryResult>, UserQueryError>,
    }

    impl MockUserQuery {
        fn found(user: UserQueryResult) -> Self {
            Self {
                result: Ok(Some(user)),
            }
        }

        fn missing() -> Self {
            Self { result: Ok(None) }
        }
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_email(
            &self,
            _email: &str,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            self.result.clone()
        }
    }

    struct StubHasher {
        matches: bool,
    }

    #[async_trait]
    impl PasswordHasher for StubHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            unimplemented!("Not used in login tests")
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(self.matches)
        }
    }

    struct StubTokenProvider;

    impl TokenProvider for StubTokenProvider {
        fn generate_access_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
            Ok("token".to_string())
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!("Not used in login tests")
        }
    }

    fn sample_user() -> UserQueryResult {
        UserQueryResult {
            id: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            current_topic_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn request() -> LoginRequest {
        LoginRequest {
            email: "ada@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
        }
    }

    // ──────────────────────────────────────────────────────────
    // Tests
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn login_success_returns_token_and_user() {
        let user = sample_user();
        let use_case = LoginUserUseCase::new(
            MockUserQuery::found(user.clone()),
            Arc::new(StubHasher { matches: true }),
            Arc::new(StubTokenProvider),
        );

        let result = use_case.execute(request()).await;

        assert!(result.is_ok(), "Expected success, got {:?}", result);
        let response = result.unwrap();
        assert_eq!(response.access_token, "token");
        assert_eq!(response.user.id, user.id);
        assert_eq!(response.user.email, "ada@example.com");
    }

    #[tokio::test]
    async fn login_unknown_email_is_invalid_credentials() {
        let use_case = LoginUserUseCase::new(
            MockUserQuery::missing(),
            Arc::new(StubHasher { matches: true }),
            Arc::new(StubTokenProvider),
        );

        let result = use_case.execute(request()).await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn login_wrong_password_is_invalid_credentials() {
        let use_case = LoginUserUseCase::new(
            MockUserQuery::found(sample_user()),
            Arc::new(StubHasher { matches: false }),
            Arc::new(StubTokenProvider),
        );

        let result = use_case.execute(request()).await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }
}
