pub mod service;
pub mod types;

pub use service::UserService;
pub use types::{CreateUserRequest, UpdateUserRequest};
