//! Password hashing service.
//!
//! Bcrypt is deliberately slow, so both hashing and verification run on the
//! blocking thread pool; a single expensive hash must never stall unrelated
//! requests on the async dispatch path. Plaintext and hashes are never logged.

use bcrypt::DEFAULT_COST;

use crate::errors::{DomainError, DomainResult};

/// Service wrapping salted one-way password hashing and verification
#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    /// Create a service with the default bcrypt cost
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Create a service with an explicit cost factor
    ///
    /// Lower costs are useful in tests; production should stay at or above
    /// the bcrypt default.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password with an embedded random salt
    ///
    /// Two calls with the same input produce different hashes, so hashes are
    /// never comparable by equality.
    pub async fn hash(&self, plaintext: &str) -> DomainResult<String> {
        let cost = self.cost;
        let plaintext = plaintext.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|_| DomainError::Internal {
                message: "Password hashing task panicked".to_string(),
            })?
            .map_err(|_| DomainError::Internal {
                message: "Password hashing failed".to_string(),
            })
    }

    /// Verify a plaintext password against a stored hash in constant time
    ///
    /// A malformed hash yields `Ok(false)` rather than an error.
    pub async fn verify(&self, plaintext: &str, hash: &str) -> DomainResult<bool> {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();

        let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash))
            .await
            .map_err(|_| DomainError::Internal {
                message: "Password verification task panicked".to_string(),
            })?;

        Ok(outcome.unwrap_or(false))
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new()
    }
}
