//! Password-recovery configuration

use serde::{Deserialize, Serialize};

/// Configuration for the password-recovery token lifecycle
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecoveryConfig {
    /// Length of the generated recovery code
    #[serde(default = "default_code_length")]
    pub code_length: usize,

    /// Seconds a recovery code stays valid after creation
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,

    /// How often the background reaper sweeps expired codes, in seconds
    #[serde(default = "default_reaper_interval")]
    pub reaper_interval_seconds: u64,

    /// Maximum regeneration attempts when a code collides with a live one
    #[serde(default = "default_max_collision_retries")]
    pub max_collision_retries: u32,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            code_length: default_code_length(),
            ttl_seconds: default_ttl_seconds(),
            reaper_interval_seconds: default_reaper_interval(),
            max_collision_retries: default_max_collision_retries(),
        }
    }
}

fn default_code_length() -> usize {
    6
}

fn default_ttl_seconds() -> u64 {
    120
}

fn default_reaper_interval() -> u64 {
    30
}

fn default_max_collision_retries() -> u32 {
    4
}
