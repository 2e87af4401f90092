use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    membership::application::ports::outgoing::TopicRecord,
};

//
// ──────────────────────────────────────────────────────────
// Propose Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ProposeTopicCommand {
    proposer: UserId,
    title: String,
    description: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ProposeTopicCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title too long")]
    TitleTooLong,

    #[error("Description cannot be empty")]
    EmptyDescription,
}

impl ProposeTopicCommand {
    pub fn new(
        proposer: UserId,
        title: String,
        description: String,
    ) -> Result<Self, ProposeTopicCommandError> {
        let title = title.trim();
        let description = description.trim();

        if title.is_empty() {
            return Err(ProposeTopicCommandError::EmptyTitle);
        }

        if title.len() > 200 {
            return Err(ProposeTopicCommandError::TitleTooLong);
        }

        if description.is_empty() {
            return Err(ProposeTopicCommandError::EmptyDescription);
        }

        Ok(Self {
            proposer,
            title: title.to_string(),
            description: description.to_string(),
        })
    }

    pub fn proposer(&self) -> &UserId {
        &self.proposer
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProposeTopicError {
    #[error("Proposing user not found")]
    ProposerNotFound,

    #[error("Store error: {0}")]
    StoreError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Create a topic and atomically make its proposer the first member,
/// evicting them from any topic they were in before.
#[async_trait]
pub trait ProposeTopicUseCase: Send + Sync {
    async fn execute(&self, command: ProposeTopicCommand) -> Result<TopicRecord, ProposeTopicError>;
}
