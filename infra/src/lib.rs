//! # Infrastructure Layer
//!
//! Concrete adapters behind the `id_core` service traits: a Redis-backed
//! cache, an in-memory cache for tests and single-process deployments, an
//! in-memory recovery token store, and a logging email notifier.
//!
//! Everything here implements a trait owned by `id_core`; the domain layer
//! never names a backend directly.

pub mod cache;
pub mod email;
pub mod store;

pub use cache::{MemoryCache, RedisCache};
pub use email::MockEmailNotifier;
pub use store::InMemoryRecoveryTokenStore;

use id_core::errors::DomainError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfraError {
    /// Redis connection or command error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Notification delivery error
    #[error("Email delivery error: {0}")]
    Email(String),
}

impl From<InfraError> for DomainError {
    fn from(err: InfraError) -> Self {
        match err {
            InfraError::Cache(e) => DomainError::Cache {
                message: e.to_string(),
            },
            InfraError::Config(message) => DomainError::Internal { message },
            InfraError::Email(message) => DomainError::Internal { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_maps_to_internal() {
        let err: DomainError = InfraError::Config("bad url".to_string()).into();
        assert!(matches!(err, DomainError::Internal { .. }));
    }
}
