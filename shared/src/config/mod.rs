//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - JWT signing and token expiry configuration
//! - `cache` - Redis connection and listing TTL configuration
//! - `recovery` - Password-recovery code and reaper configuration
//!
//! Loading these structs from files or the environment is the embedding
//! application's concern; this crate only defines the shapes and defaults.

pub mod auth;
pub mod cache;
pub mod recovery;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use recovery::RecoveryConfig;
