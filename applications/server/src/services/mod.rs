/// Server services
pub mod accounts;
pub mod password;

pub use accounts::{
    AccountError, CreateUserRequest, DeleteUserRequest, UpdateUserRequest, UserAccountService,
};
pub use password::PasswordHasher;
