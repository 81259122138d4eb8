//! In-memory recovery token store.
//!
//! Recovery codes live for two minutes and are consumed at most once, so a
//! process-local map is an acceptable backing store: a restart only forces
//! users mid-recovery to request a fresh code. Swap in a Redis-backed
//! implementation of the same trait if recovery must survive restarts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use id_core::domain::entities::recovery_token::RecoveryToken;
use id_core::errors::DomainError;
use id_core::repositories::RecoveryTokenRepository;

/// Process-local `RecoveryTokenRepository` keyed by code
#[derive(Default)]
pub struct InMemoryRecoveryTokenStore {
    tokens: RwLock<HashMap<String, RecoveryToken>>,
}

impl InMemoryRecoveryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tokens, expired ones included until the next sweep
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }
}

#[async_trait]
impl RecoveryTokenRepository for InMemoryRecoveryTokenStore {
    async fn save(&self, token: RecoveryToken) -> Result<(), DomainError> {
        let mut tokens = self.tokens.write().await;
        if let Some(previous) = tokens.insert(token.code.clone(), token) {
            // Code generation retries on collision, so an overwrite points at
            // a uniqueness check that raced with this save.
            warn!(
                user_guid = %previous.user_guid,
                "recovery code collision overwrote an existing token"
            );
        }
        Ok(())
    }

    async fn find(&self, code: &str) -> Result<Option<RecoveryToken>, DomainError> {
        Ok(self.tokens.read().await.get(code).cloned())
    }

    async fn delete(&self, code: &str) -> Result<(), DomainError> {
        let removed = self.tokens.write().await.remove(code).is_some();
        debug!(removed, "recovery token delete");
        Ok(())
    }

    async fn delete_expired(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, token| token.created_at >= cutoff);
        Ok(before - tokens.len())
    }
}
