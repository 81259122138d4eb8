//! Cache service trait and key layout.
//!
//! The cache is a read-through layer in front of the user directory. Entries
//! are owned exclusively by the implementation behind this trait; producers
//! only go through `get`/`set`/`delete` and never inspect internal storage.
//! Operations on a single key are atomic; no multi-key transaction exists.

use async_trait::async_trait;
use std::time::Duration;

use crate::errors::DomainError;

/// Generic async key/value cache with optional per-entry TTL
///
/// Values are opaque serialized strings (serde_json in practice). A `None`
/// TTL means the entry persists until explicitly deleted or the backing
/// process restarts.
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Fetch a value; `Ok(None)` on miss
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Store a value, optionally expiring after `ttl`
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), DomainError>;

    /// Remove a value; absent keys are a no-op
    async fn delete(&self, key: &str) -> Result<(), DomainError>;
}

/// Cache key layout for the user directory
pub mod keys {
    /// Fixed key holding the full list of ordinary-role users (no TTL)
    pub const ALL_USERS: &str = "users:all";

    /// Per-guid single-user entry (no TTL, invalidated on mutation)
    pub fn user_by_guid(guid: &str) -> String {
        format!("users:guid:{}", guid)
    }

    /// Paginated/searched listing entry (60 second TTL by default)
    pub fn user_page(page: u32, per_page: u32, search: Option<&str>) -> String {
        format!(
            "users:page:{}:{}:{}",
            page,
            per_page,
            search.unwrap_or("-")
        )
    }
}
