use async_trait::async_trait;

use crate::membership::application::ports::{
    incoming::use_cases::{ProposeTopicCommand, ProposeTopicError, ProposeTopicUseCase},
    outgoing::{MembershipStore, MembershipStoreError, ProposeTopicData, TopicRecord},
};

#[derive(Debug, Clone)]
pub struct ProposeTopicService<S>
where
    S: MembershipStore + Send + Sync,
{
    store: S,
}

impl<S> ProposeTopicService<S>
where
    S: MembershipStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ProposeTopicUseCase for ProposeTopicService<S>
where
    S: MembershipStore + Send + Sync,
{
    async fn execute(
        &self,
        command: ProposeTopicCommand,
    ) -> Result<TopicRecord, ProposeTopicError> {
        let data = ProposeTopicData {
            creator: *command.proposer(),
            title: command.title().to_string(),
            description: command.description().to_string(),
        };

        self.store.propose_topic(data).await.map_err(|e| match e {
            MembershipStoreError::UserNotFound => ProposeTopicError::ProposerNotFound,
            other => ProposeTopicError::StoreError(other.to_string()),
        })
    }
}
