//! Recovery token repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::recovery_token::RecoveryToken;
use crate::errors::DomainError;

/// Repository trait for recovery token persistence
///
/// Deletion is idempotent everywhere: removing an absent code is a successful
/// no-op. That keeps the consume-versus-reap race safe, since both paths end
/// in a delete.
#[async_trait]
pub trait RecoveryTokenRepository: Send + Sync {
    /// Persist a freshly created token
    async fn save(&self, token: RecoveryToken) -> Result<(), DomainError>;

    /// Exact lookup by code; `Ok(None)` when absent
    ///
    /// Implementations return the raw record; the service layer applies the
    /// lazy-expiry check so TTL policy stays in one place.
    async fn find(&self, code: &str) -> Result<Option<RecoveryToken>, DomainError>;

    /// Remove a token by code; absent codes are a no-op
    async fn delete(&self, code: &str) -> Result<(), DomainError>;

    /// Remove every token created before `cutoff`, returning the count
    ///
    /// Used by the background reaper to sweep entries older than the TTL.
    /// A token created exactly at `cutoff` survives, matching the strict
    /// comparison in `RecoveryToken::is_expired`.
    async fn delete_expired(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError>;
}
