pub mod join_topic_service;
pub mod leave_topic_service;
pub mod propose_topic_service;
pub mod topic_views_service;

pub use join_topic_service::JoinTopicService;
pub use leave_topic_service::LeaveTopicService;
pub use propose_topic_service::ProposeTopicService;
pub use topic_views_service::TopicViewsService;
