//! Mock email notifier.
//!
//! Logs recovery emails instead of sending them. Used in development and in
//! tests; a real SMTP or provider-API adapter implements the same trait.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use id_core::services::recovery::Notifier;
use id_shared::utils::validation::{is_valid_email, mask_email};

/// Email notifier that logs instead of sending
///
/// Tracks a send counter and can simulate provider failures so the
/// best-effort delivery path in the recovery flow is testable.
#[derive(Clone)]
pub struct MockEmailNotifier {
    send_count: Arc<AtomicU64>,
    simulate_failure: bool,
}

impl MockEmailNotifier {
    pub fn new() -> Self {
        Self {
            send_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Create a notifier that fails every send
    pub fn failing() -> Self {
        Self {
            send_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Number of emails delivered so far
    pub fn send_count(&self) -> u64 {
        self.send_count.load(Ordering::SeqCst)
    }
}

impl Default for MockEmailNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for MockEmailNotifier {
    async fn send_recovery_code(&self, email: &str, code: &str) -> Result<String, String> {
        let masked = mask_email(email);

        if !is_valid_email(email) {
            return Err(format!("invalid email address: {}", masked));
        }

        if self.simulate_failure {
            warn!(
                target: "email_delivery",
                email = %masked,
                "simulating email delivery failure"
            );
            return Err("simulated email delivery failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.send_count.fetch_add(1, Ordering::SeqCst) + 1;

        // The code itself is deliberately absent from the log line.
        info!(
            target: "email_delivery",
            provider = "mock",
            email = %masked,
            message_id = %message_id,
            total_sent = count,
            code_length = code.len(),
            "recovery email dispatched"
        );

        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_returns_message_id_and_counts() {
        let notifier = MockEmailNotifier::new();
        let id = notifier
            .send_recovery_code("alice@example.com", "a1b2c3")
            .await
            .unwrap();
        assert!(id.starts_with("mock_"));
        assert_eq!(notifier.send_count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_address_rejected() {
        let notifier = MockEmailNotifier::new();
        let result = notifier.send_recovery_code("not-an-email", "a1b2c3").await;
        assert!(result.is_err());
        assert_eq!(notifier.send_count(), 0);
    }

    #[tokio::test]
    async fn test_simulated_failure_does_not_count() {
        let notifier = MockEmailNotifier::failing();
        let result = notifier
            .send_recovery_code("alice@example.com", "a1b2c3")
            .await;
        assert!(result.is_err());
        assert_eq!(notifier.send_count(), 0);
    }

    #[tokio::test]
    async fn test_counter_shared_across_clones() {
        let notifier = MockEmailNotifier::new();
        let clone = notifier.clone();
        clone
            .send_recovery_code("alice@example.com", "a1b2c3")
            .await
            .unwrap();
        assert_eq!(notifier.send_count(), 1);
    }
}
