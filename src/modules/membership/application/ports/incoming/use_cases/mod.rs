pub mod join_topic_use_case;
pub mod leave_topic_use_case;
pub mod propose_topic_use_case;
pub mod topic_views_use_case;

pub use join_topic_use_case::{JoinTopicError, JoinTopicUseCase};
pub use leave_topic_use_case::{LeaveTopicError, LeaveTopicUseCase};
pub use propose_topic_use_case::{
    ProposeTopicCommand, ProposeTopicCommandError, ProposeTopicError, ProposeTopicUseCase,
};
pub use topic_views_use_case::{TopicViewsError, TopicViewsUseCase};
