use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    membership::application::ports::{
        incoming::use_cases::{LeaveTopicError, LeaveTopicUseCase},
        outgoing::{MembershipStore, MembershipStoreError},
    },
};

#[derive(Debug, Clone)]
pub struct LeaveTopicService<S>
where
    S: MembershipStore + Send + Sync,
{
    store: S,
}

impl<S> LeaveTopicService<S>
where
    S: MembershipStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> LeaveTopicUseCase for LeaveTopicService<S>
where
    S: MembershipStore + Send + Sync,
{
    async fn execute(&self, user: UserId) -> Result<(), LeaveTopicError> {
        self.store
            .leave_topic(user)
            .await
            .map_err(|e| LeaveTopicError::StoreError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::membership::application::ports::outgoing::{ProposeTopicData, TopicRecord};

    #[derive(Debug, Clone)]
    struct MockMembershipStore {
        result: Result<(), MembershipStoreError>,
    }

    #[async_trait]
    impl MembershipStore for MockMembershipStore {
        async fn propose_topic(
            &self,
            _data: ProposeTopicData,
        ) -> Result<TopicRecord, MembershipStoreError> {
            unimplemented!("Not used in leave tests")
        }

        async fn join_topic(
            &self,
            _user: UserId,
            _topic_id: Uuid,
        ) -> Result<TopicRecord, MembershipStoreError> {
            unimplemented!("Not used in leave tests")
        }

        async fn leave_topic(&self, _user: UserId) -> Result<(), MembershipStoreError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn leave_topic_success() {
        let service = LeaveTopicService::new(MockMembershipStore { result: Ok(()) });

        let result = service.execute(UserId::from(Uuid::new_v4())).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn leave_store_error_is_mapped() {
        let service = LeaveTopicService::new(MockMembershipStore {
            result: Err(MembershipStoreError::DatabaseError("timeout".to_string())),
        });

        let result = service.execute(UserId::from(Uuid::new_v4())).await;

        match result {
            Err(LeaveTopicError::StoreError(msg)) => assert!(msg.contains("timeout")),
            Ok(_) => panic!("expected store error to be mapped"),
        }
    }
}
