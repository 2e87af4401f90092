use std::sync::Arc;

use actix_web::web;

use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::membership::application::ports::incoming::use_cases::{
    JoinTopicUseCase, LeaveTopicUseCase, ProposeTopicUseCase, TopicViewsUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is a benign stub, letting
/// each route test swap in just the mock it is exercising.
pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    propose_topic: Arc<dyn ProposeTopicUseCase + Send + Sync>,
    join_topic: Arc<dyn JoinTopicUseCase + Send + Sync>,
    leave_topic: Arc<dyn LeaveTopicUseCase + Send + Sync>,
    topic_views: Arc<dyn TopicViewsUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            propose_topic: Arc::new(StubProposeTopicUseCase),
            join_topic: Arc::new(StubJoinTopicUseCase),
            leave_topic: Arc::new(StubLeaveTopicUseCase),
            topic_views: Arc::new(StubTopicViewsUseCase::default()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_propose_topic(
        mut self,
        uc: impl ProposeTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.propose_topic = Arc::new(uc);
        self
    }

    pub fn with_join_topic(mut self, uc: impl JoinTopicUseCase + Send + Sync + 'static) -> Self {
        self.join_topic = Arc::new(uc);
        self
    }

    pub fn with_leave_topic(mut self, uc: impl LeaveTopicUseCase + Send + Sync + 'static) -> Self {
        self.leave_topic = Arc::new(uc);
        self
    }

    pub fn with_topic_views(mut self, uc: impl TopicViewsUseCase + Send + Sync + 'static) -> Self {
        self.topic_views = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            propose_topic_use_case: self.propose_topic,
            join_topic_use_case: self.join_topic,
            leave_topic_use_case: self.leave_topic,
            topic_views_use_case: self.topic_views,
        })
    }
}
