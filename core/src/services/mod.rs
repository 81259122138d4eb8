//! Business services containing domain logic and use cases.

pub mod auth;
pub mod cache;
pub mod clock;
pub mod password;
pub mod recovery;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use auth::{AuthService, RoleAuthorizer};
pub use cache::{keys, CacheService};
pub use clock::{Clock, ManualClock, SystemClock};
pub use password::PasswordService;
pub use recovery::{Notifier, RecoveryReaper, RecoveryService};
pub use token::{TokenService, TokenServiceConfig};
pub use user::{CreateUserRequest, UpdateUserRequest, UserService};
