pub mod get_topic;
pub mod get_topics;
pub mod join_topic;
pub mod leave_topic;
pub mod me;
pub mod propose_topic;
pub mod topic_members;
pub mod topic_stats;
pub mod unassigned_users;
pub mod unclaimed_topics;

pub use get_topic::{get_topic_handler, __path_get_topic_handler};
pub use get_topics::{get_topics_handler, __path_get_topics_handler};
pub use join_topic::{join_topic_handler, __path_join_topic_handler};
pub use leave_topic::{leave_topic_handler, __path_leave_topic_handler};
pub use me::{get_me_handler, __path_get_me_handler};
pub use propose_topic::{propose_topic_handler, __path_propose_topic_handler, ProposeTopicRequest};
pub use topic_members::{topic_members_handler, __path_topic_members_handler};
pub use topic_stats::{topic_stats_handler, __path_topic_stats_handler};
pub use unassigned_users::{unassigned_users_handler, __path_unassigned_users_handler};
pub use unclaimed_topics::{unclaimed_topics_handler, __path_unclaimed_topics_handler};
