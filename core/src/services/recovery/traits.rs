//! Collaborator traits for the recovery flow.

use async_trait::async_trait;

/// Outbound notification channel for recovery codes
///
/// Delivery is best-effort: the recovery flow logs a failure and moves on,
/// since the token stays valid regardless of whether the message landed.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a recovery code to the given address
    ///
    /// Returns a provider message id on success.
    async fn send_recovery_code(&self, email: &str, code: &str) -> Result<String, String>;
}
