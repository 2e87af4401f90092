pub mod membership_store_postgres;
pub mod membership_views_postgres;
pub mod sea_orm_entity;

pub use membership_store_postgres::MembershipStorePostgres;
pub use membership_views_postgres::MembershipViewsPostgres;
