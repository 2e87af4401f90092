use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    TokenClaims, TokenError, TokenProvider, UserRecord,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserInfo, LoginUserResponse,
};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserInput,
};
use crate::membership::application::ports::incoming::use_cases::{
    JoinTopicError, JoinTopicUseCase, LeaveTopicError, LeaveTopicUseCase, ProposeTopicCommand,
    ProposeTopicError, ProposeTopicUseCase, TopicViewsError, TopicViewsUseCase,
};
use crate::membership::application::ports::outgoing::{
    MemberInfo, TopicRecord, TopicStats, TopicSummary, TopicWithMembers, UserWithTopic,
};

//
// ──────────────────────────────────────────────────────────
// Token provider
// ──────────────────────────────────────────────────────────
//

/// Accepts any bearer token and resolves it to a fixed user id.
pub struct StubTokenProvider {
    pub user_id: Uuid,
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        Ok(format!("stub-token-{user_id}"))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let now = Utc::now().timestamp();
        Ok(TokenClaims {
            sub: self.user_id,
            exp: now + 3600,
            iat: now,
            nbf: now,
            token_type: "access".to_string(),
        })
    }
}

/// Drop-in `app_data` for routes behind the auth extractor.
pub fn token_provider_for(user_id: Uuid) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(StubTokenProvider { user_id });
    web::Data::new(provider)
}

//
// ──────────────────────────────────────────────────────────
// Auth use cases
// ──────────────────────────────────────────────────────────
//

pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, input: RegisterUserInput) -> Result<UserRecord, RegisterUserError> {
        Ok(UserRecord {
            id: Uuid::new_v4(),
            email: input.email,
            name: input.name,
        })
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Ok(LoginUserResponse {
            access_token: "stub-access-token".to_string(),
            user: LoginUserInfo {
                id: Uuid::new_v4(),
                email: request.email,
                name: "Stub User".to_string(),
            },
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Membership use cases
// ──────────────────────────────────────────────────────────
//

fn stub_topic_record(creator: UserId) -> TopicRecord {
    TopicRecord {
        id: Uuid::new_v4(),
        title: "Stub topic".to_string(),
        description: "Stub description".to_string(),
        creator_id: creator,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub struct StubProposeTopicUseCase;

#[async_trait]
impl ProposeTopicUseCase for StubProposeTopicUseCase {
    async fn execute(
        &self,
        command: ProposeTopicCommand,
    ) -> Result<TopicRecord, ProposeTopicError> {
        Ok(stub_topic_record(*command.proposer()))
    }
}

pub struct StubJoinTopicUseCase;

#[async_trait]
impl JoinTopicUseCase for StubJoinTopicUseCase {
    async fn execute(&self, user: UserId, topic_id: Uuid) -> Result<TopicRecord, JoinTopicError> {
        let mut record = stub_topic_record(user);
        record.id = topic_id;
        Ok(record)
    }
}

pub struct StubLeaveTopicUseCase;

#[async_trait]
impl LeaveTopicUseCase for StubLeaveTopicUseCase {
    async fn execute(&self, _user: UserId) -> Result<(), LeaveTopicError> {
        Ok(())
    }
}

/// Canned projections. Everything defaults to empty or absent; the
/// `with_*` constructors pin down the one view a test cares about.
#[derive(Default)]
pub struct StubTopicViewsUseCase {
    pub topics: Vec<TopicSummary>,
    pub topic_detail: Option<TopicWithMembers>,
    pub profile: Option<UserWithTopic>,
    pub unclaimed: Vec<TopicRecord>,
    pub unassigned: Vec<MemberInfo>,
    pub stats: Option<TopicStats>,
}

impl StubTopicViewsUseCase {
    pub fn with_topics(topics: Vec<TopicSummary>) -> Self {
        Self {
            topics,
            ..Default::default()
        }
    }

    pub fn with_topic_detail(detail: TopicWithMembers) -> Self {
        Self {
            topic_detail: Some(detail),
            ..Default::default()
        }
    }

    pub fn with_profile(profile: UserWithTopic) -> Self {
        Self {
            profile: Some(profile),
            ..Default::default()
        }
    }

    pub fn with_unclaimed(unclaimed: Vec<TopicRecord>) -> Self {
        Self {
            unclaimed,
            ..Default::default()
        }
    }

    pub fn with_unassigned(unassigned: Vec<MemberInfo>) -> Self {
        Self {
            unassigned,
            ..Default::default()
        }
    }

    pub fn with_stats(stats: TopicStats) -> Self {
        Self {
            stats: Some(stats),
            ..Default::default()
        }
    }
}

#[async_trait]
impl TopicViewsUseCase for StubTopicViewsUseCase {
    async fn all_topics(&self) -> Result<Vec<TopicSummary>, TopicViewsError> {
        Ok(self.topics.clone())
    }

    async fn topic_with_members(
        &self,
        _topic_id: Uuid,
    ) -> Result<Option<TopicWithMembers>, TopicViewsError> {
        Ok(self.topic_detail.clone())
    }

    async fn user_with_topic(
        &self,
        _user_id: Uuid,
    ) -> Result<Option<UserWithTopic>, TopicViewsError> {
        Ok(self.profile.clone())
    }

    async fn topics_with_no_members(&self) -> Result<Vec<TopicRecord>, TopicViewsError> {
        Ok(self.unclaimed.clone())
    }

    async fn users_without_topic(&self) -> Result<Vec<MemberInfo>, TopicViewsError> {
        Ok(self.unassigned.clone())
    }

    async fn users_in_topic(
        &self,
        _topic_id: Uuid,
    ) -> Result<Option<Vec<MemberInfo>>, TopicViewsError> {
        Ok(self.topic_detail.as_ref().map(|t| t.members.clone()))
    }

    async fn topic_stats(&self, _topic_id: Uuid) -> Result<Option<TopicStats>, TopicViewsError> {
        Ok(self.stats.clone())
    }
}
