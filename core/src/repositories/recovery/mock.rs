//! Mock implementation of RecoveryTokenRepository for testing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::recovery_token::RecoveryToken;
use crate::errors::DomainError;

use super::trait_::RecoveryTokenRepository;

/// In-memory recovery token repository keyed by code
pub struct MockRecoveryTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RecoveryToken>>>,
}

impl MockRecoveryTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of live entries, for test assertions
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// Whether the store is empty, for test assertions
    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl Default for MockRecoveryTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecoveryTokenRepository for MockRecoveryTokenRepository {
    async fn save(&self, token: RecoveryToken) -> Result<(), DomainError> {
        let mut tokens = self.tokens.write().await;
        tokens.insert(token.code.clone(), token);
        Ok(())
    }

    async fn find(&self, code: &str) -> Result<Option<RecoveryToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(code).cloned())
    }

    async fn delete(&self, code: &str) -> Result<(), DomainError> {
        let mut tokens = self.tokens.write().await;
        tokens.remove(code);
        Ok(())
    }

    async fn delete_expired(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, token| token.created_at >= cutoff);
        Ok(before - tokens.len())
    }
}
