pub mod login_user;
pub mod register_user;

pub use login_user::{login_user_handler, __path_login_user_handler, LoginUserRequest};
pub use register_user::{register_user_handler, __path_register_user_handler, RegisterUserRequest};
