//! Shared utilities and common types for the Identra server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Pagination types
//! - Utility functions (email validation, date normalization)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{CacheConfig, JwtConfig, RecoveryConfig};
pub use types::{PaginatedResponse, Pagination, PaginationMeta};
pub use utils::{time, validation};
