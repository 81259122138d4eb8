//! Background reaper for expired recovery tokens.
//!
//! Lazy expiry already keeps stale tokens from being consumed; the reaper
//! exists so abandoned entries do not pile up in the store. Cleanup runs as
//! a single inspectable task whose sweeps are observable and whose lifetime
//! is not tied to any request or token.

use chrono::Duration;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use id_shared::config::RecoveryConfig;

use crate::errors::DomainResult;
use crate::repositories::RecoveryTokenRepository;
use crate::services::clock::Clock;

/// Periodic sweeper deleting recovery tokens past their TTL
pub struct RecoveryReaper<R: RecoveryTokenRepository> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
    config: RecoveryConfig,
}

impl<R: RecoveryTokenRepository + 'static> RecoveryReaper<R> {
    /// Create a new reaper over the given token store
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>, config: RecoveryConfig) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    /// Run a single sweep, returning how many tokens were deleted
    pub async fn run_sweep(&self) -> DomainResult<usize> {
        let cutoff = self.clock.now() - Duration::seconds(self.config.ttl_seconds as i64);
        let swept = self.repository.delete_expired(cutoff).await?;
        if swept > 0 {
            info!(swept, "reaped expired recovery tokens");
        }
        Ok(swept)
    }

    /// Spawn the reaper as a detached interval task
    ///
    /// The task outlives the request that created any token and keeps
    /// sweeping until the handle is aborted or the runtime shuts down.
    pub fn spawn(self) -> JoinHandle<()> {
        let interval_seconds = self.config.reaper_interval_seconds;
        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(std::time::Duration::from_secs(interval_seconds));
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if let Err(error) = self.run_sweep().await {
                    warn!(error = %error, "recovery token sweep failed");
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::recovery_token::RecoveryToken;
    use crate::repositories::MockRecoveryTokenRepository;
    use crate::services::clock::ManualClock;

    fn reaper(
        repo: Arc<MockRecoveryTokenRepository>,
        clock: Arc<ManualClock>,
    ) -> RecoveryReaper<MockRecoveryTokenRepository> {
        RecoveryReaper::new(repo, clock, RecoveryConfig::default())
    }

    #[tokio::test]
    async fn test_sweep_deletes_only_expired_tokens() {
        let repo = Arc::new(MockRecoveryTokenRepository::new());
        let clock = Arc::new(ManualClock::starting_now());
        let now = clock.now();

        repo.save(RecoveryToken::new(
            "stale1".to_string(),
            "user-1".to_string(),
            now,
        ))
        .await
        .unwrap();

        clock.advance(Duration::seconds(60));
        repo.save(RecoveryToken::new(
            "fresh2".to_string(),
            "user-2".to_string(),
            clock.now(),
        ))
        .await
        .unwrap();

        // Move past the first token's TTL but not the second's
        clock.advance(Duration::seconds(61));

        let reaper = reaper(repo.clone(), clock);
        assert_eq!(reaper.run_sweep().await.unwrap(), 1);
        assert!(repo.find("stale1").await.unwrap().is_none());
        assert!(repo.find("fresh2").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_sweep_is_a_noop_when_nothing_expired() {
        let repo = Arc::new(MockRecoveryTokenRepository::new());
        let clock = Arc::new(ManualClock::starting_now());
        repo.save(RecoveryToken::new(
            "fresh1".to_string(),
            "user-1".to_string(),
            clock.now(),
        ))
        .await
        .unwrap();

        let reaper = reaper(repo.clone(), clock);
        assert_eq!(reaper.run_sweep().await.unwrap(), 0);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_sweep_after_consumption_is_safe() {
        // The consume-then-reap order must be a harmless no-op
        let repo = Arc::new(MockRecoveryTokenRepository::new());
        let clock = Arc::new(ManualClock::starting_now());
        repo.save(RecoveryToken::new(
            "used99".to_string(),
            "user-1".to_string(),
            clock.now() - Duration::seconds(300),
        ))
        .await
        .unwrap();

        repo.delete("used99").await.unwrap();

        let reaper = reaper(repo.clone(), clock);
        assert_eq!(reaper.run_sweep().await.unwrap(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_reaper_sweeps_independently() {
        let repo = Arc::new(MockRecoveryTokenRepository::new());
        let clock = Arc::new(ManualClock::starting_now());
        repo.save(RecoveryToken::new(
            "old123".to_string(),
            "user-1".to_string(),
            clock.now() - Duration::seconds(300),
        ))
        .await
        .unwrap();

        let handle = reaper(repo.clone(), Arc::clone(&clock)).spawn();

        // The interval's first tick fires immediately; let the task run
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert!(repo.is_empty().await);

        handle.abort();
    }
}
