//! Recovery token entity for the forgot-password flow.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Length of the recovery code sent to the user
pub const RECOVERY_CODE_LENGTH: usize = 6;

/// Seconds a recovery token stays valid after creation
pub const RECOVERY_TOKEN_TTL_SECONDS: u64 = 120;

/// Single-use, time-bound code proving control of an account's email
///
/// A token is valid from `created_at` until it is consumed by a successful
/// password reset or its TTL elapses, whichever comes first. Expiry is lazy:
/// the store keeps `created_at` and every lookup checks the elapsed time, so
/// no detached timer has to be tracked or cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryToken {
    /// Short random code delivered to the user
    pub code: String,

    /// Guid of the owning user
    pub user_guid: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,
}

impl RecoveryToken {
    /// Creates a new recovery token bound to a user
    pub fn new(code: String, user_guid: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            user_guid,
            created_at,
        }
    }

    /// Checks whether the token has outlived its TTL at the given instant
    pub fn is_expired(&self, now: DateTime<Utc>, ttl_seconds: u64) -> bool {
        now - self.created_at > Duration::seconds(ttl_seconds as i64)
    }
}
