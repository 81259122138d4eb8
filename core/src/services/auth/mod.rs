pub mod authorizer;
pub mod service;

pub use authorizer::RoleAuthorizer;
pub use service::AuthService;
