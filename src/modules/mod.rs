pub mod auth;
pub mod membership;
