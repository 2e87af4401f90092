pub mod membership_store;
pub mod membership_views;

pub use membership_store::{
    MembershipStore, MembershipStoreError, ProposeTopicData, TopicRecord,
};
pub use membership_views::{
    MemberInfo, MembershipViewError, MembershipViews, TopicStats, TopicSummary, TopicWithCreator,
    TopicWithMembers, UserWithTopic,
};
