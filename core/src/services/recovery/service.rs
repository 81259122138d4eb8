//! Password-recovery orchestration.
//!
//! A recovery attempt moves through Requested → TokenIssued → Consumed or
//! Expired. Expiry is lazy: every lookup checks the token's age against the
//! TTL, and the `RecoveryReaper` sweeps stale rows in the background. Both
//! consumption and expiry end in an idempotent delete, so the race between
//! "user consumes token" and "reaper fires" is safe in either order.

use rand::rngs::OsRng;
use rand::RngCore;
use std::sync::Arc;
use tracing::{debug, info, warn};

use id_shared::config::RecoveryConfig;
use id_shared::utils::validation::mask_email;

use crate::domain::entities::recovery_token::RecoveryToken;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{RecoveryTokenRepository, UserRepository};
use crate::services::cache::{keys, CacheService};
use crate::services::clock::Clock;
use crate::services::password::PasswordService;

use super::traits::Notifier;

/// Orchestrates the forgot-password → reset-password flow
pub struct RecoveryService<U, R, N, C>
where
    U: UserRepository,
    R: RecoveryTokenRepository,
    N: Notifier,
    C: CacheService,
{
    user_repository: Arc<U>,
    token_repository: Arc<R>,
    notifier: Arc<N>,
    password_service: Arc<PasswordService>,
    cache: Arc<C>,
    clock: Arc<dyn Clock>,
    config: RecoveryConfig,
}

impl<U, R, N, C> RecoveryService<U, R, N, C>
where
    U: UserRepository,
    R: RecoveryTokenRepository,
    N: Notifier,
    C: CacheService,
{
    /// Create a new recovery service
    pub fn new(
        user_repository: Arc<U>,
        token_repository: Arc<R>,
        notifier: Arc<N>,
        password_service: Arc<PasswordService>,
        cache: Arc<C>,
        clock: Arc<dyn Clock>,
        config: RecoveryConfig,
    ) -> Self {
        Self {
            user_repository,
            token_repository,
            notifier,
            password_service,
            cache,
            clock,
            config,
        }
    }

    /// Start a recovery attempt for the account registered under `email`
    ///
    /// Resolves the email to an identity, creates a time-bound token, and
    /// dispatches the code. An unknown email surfaces `UserNotFound` rather
    /// than a masked success response; callers that need anti-enumeration
    /// behavior flatten the error at their own boundary. Delivery failure is
    /// logged, not escalated: the token stays valid either way.
    pub async fn request_recovery(&self, email: &str) -> DomainResult<()> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let code = self.generate_unique_code().await?;
        let token = RecoveryToken::new(code.clone(), user.guid.clone(), self.clock.now());
        self.token_repository.save(token).await?;

        info!(guid = %user.guid, "recovery token issued");

        match self.notifier.send_recovery_code(&user.email, &code).await {
            Ok(message_id) => {
                debug!(message_id = %message_id, "recovery code dispatched");
            }
            Err(error) => {
                warn!(
                    email = %mask_email(&user.email),
                    error = %error,
                    "recovery code delivery failed; token remains valid"
                );
            }
        }

        Ok(())
    }

    /// Consume a recovery token and set a new password
    ///
    /// The confirm check runs before any persistence. An unknown or expired
    /// code fails `NotFound`; an expired record found on the way is deleted
    /// lazily.
    pub async fn reset_password(
        &self,
        code: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> DomainResult<()> {
        if new_password != confirm_password {
            return Err(DomainError::validation(
                "New password and confirm password do not match",
            ));
        }

        let token = self
            .token_repository
            .find(code)
            .await?
            .ok_or_else(|| DomainError::not_found("Recovery token"))?;

        if token.is_expired(self.clock.now(), self.config.ttl_seconds) {
            self.token_repository.delete(code).await?;
            debug!("recovery token expired at lookup");
            return Err(DomainError::not_found("Recovery token"));
        }

        let mut user = self
            .user_repository
            .find_by_guid(&token.user_guid)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        let password_hash = self.password_service.hash(new_password).await?;
        user.set_password_hash(password_hash);
        self.user_repository
            .update(user)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        self.token_repository.delete(code).await?;
        self.cache
            .delete(&keys::user_by_guid(&token.user_guid))
            .await?;

        info!(guid = %token.user_guid, "password reset via recovery token");
        Ok(())
    }

    /// Generate a code that does not collide with any currently-live token
    async fn generate_unique_code(&self) -> DomainResult<String> {
        for _ in 0..self.config.max_collision_retries {
            let code = self.generate_code();
            if self.token_repository.find(&code).await?.is_none() {
                return Ok(code);
            }
            debug!("recovery code collision, regenerating");
        }

        Err(DomainError::Internal {
            message: "Could not generate a unique recovery code".to_string(),
        })
    }

    /// Draw `code_length` hex characters from the OS entropy source
    fn generate_code(&self) -> String {
        let byte_len = (self.config.code_length + 1) / 2;
        let mut bytes = vec![0u8; byte_len];
        OsRng.fill_bytes(&mut bytes);

        let mut code = hex::encode(bytes);
        code.truncate(self.config.code_length);
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::{User, UserRole};
    use crate::repositories::{MockRecoveryTokenRepository, MockUserRepository};
    use crate::services::clock::ManualClock;
    use async_trait::async_trait;
    use chrono::Duration;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration as StdDuration;
    use tokio::sync::RwLock;

    /// Notifier that records the last dispatched code
    struct RecordingNotifier {
        last_code: RwLock<Option<String>>,
        fail: AtomicBool,
    }

    impl RecordingNotifier {
        fn new() -> Self {
            Self {
                last_code: RwLock::new(None),
                fail: AtomicBool::new(false),
            }
        }

        async fn last_code(&self) -> Option<String> {
            self.last_code.read().await.clone()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send_recovery_code(&self, _email: &str, code: &str) -> Result<String, String> {
            if self.fail.load(Ordering::SeqCst) {
                return Err("smtp unreachable".to_string());
            }
            *self.last_code.write().await = Some(code.to_string());
            Ok(format!("mock-{}", code))
        }
    }

    struct TestCache {
        entries: RwLock<HashMap<String, String>>,
    }

    impl TestCache {
        fn new() -> Self {
            Self {
                entries: RwLock::new(HashMap::new()),
            }
        }

        async fn contains(&self, key: &str) -> bool {
            self.entries.read().await.contains_key(key)
        }

        async fn put(&self, key: &str, value: &str) {
            self.entries
                .write()
                .await
                .insert(key.to_string(), value.to_string());
        }
    }

    #[async_trait]
    impl CacheService for TestCache {
        async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
            Ok(self.entries.read().await.get(key).cloned())
        }

        async fn set(
            &self,
            key: &str,
            value: &str,
            _ttl: Option<StdDuration>,
        ) -> Result<(), DomainError> {
            self.put(key, value).await;
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<(), DomainError> {
            self.entries.write().await.remove(key);
            Ok(())
        }
    }

    struct Fixture {
        service: RecoveryService<
            MockUserRepository,
            MockRecoveryTokenRepository,
            RecordingNotifier,
            TestCache,
        >,
        user_repo: Arc<MockUserRepository>,
        token_repo: Arc<MockRecoveryTokenRepository>,
        notifier: Arc<RecordingNotifier>,
        cache: Arc<TestCache>,
        clock: Arc<ManualClock>,
    }

    async fn fixture() -> (Fixture, User) {
        let user_repo = Arc::new(MockUserRepository::new());
        let token_repo = Arc::new(MockRecoveryTokenRepository::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let cache = Arc::new(TestCache::new());
        let clock = Arc::new(ManualClock::starting_now());
        let password_service = Arc::new(PasswordService::with_cost(4));

        let hash = password_service.hash("Secret1!").await.unwrap();
        let user = user_repo
            .create(User::new(
                "Alice".to_string(),
                "alice@example.com".to_string(),
                None,
                None,
                hash,
                UserRole::User,
            ))
            .await
            .unwrap();

        let service = RecoveryService::new(
            user_repo.clone(),
            token_repo.clone(),
            notifier.clone(),
            password_service,
            cache.clone(),
            clock.clone(),
            RecoveryConfig::default(),
        );

        (
            Fixture {
                service,
                user_repo,
                token_repo,
                notifier,
                cache,
                clock,
            },
            user,
        )
    }

    #[tokio::test]
    async fn test_request_recovery_unknown_email() {
        let (f, _user) = fixture().await;
        let result = f.service.request_recovery("nobody@example.com").await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::UserNotFound))
        ));
        assert!(f.token_repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_request_recovery_issues_six_char_hex_code() {
        let (f, user) = fixture().await;
        f.service.request_recovery("alice@example.com").await.unwrap();

        let code = f.notifier.last_code().await.expect("code dispatched");
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_hexdigit()));

        let stored = f.token_repo.find(&code).await.unwrap().unwrap();
        assert_eq!(stored.user_guid, user.guid);
    }

    #[tokio::test]
    async fn test_notifier_failure_is_swallowed() {
        let (f, _user) = fixture().await;
        f.notifier.fail.store(true, Ordering::SeqCst);

        f.service.request_recovery("alice@example.com").await.unwrap();
        // Token exists even though delivery failed
        assert_eq!(f.token_repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_reset_password_mismatch_writes_nothing() {
        let (f, user) = fixture().await;
        f.service.request_recovery("alice@example.com").await.unwrap();
        let code = f.notifier.last_code().await.unwrap();

        let result = f
            .service
            .reset_password(&code, "NewPass1!", "Different!")
            .await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));

        // Neither the token nor the password was touched
        assert_eq!(f.token_repo.len().await, 1);
        let stored = f.user_repo.find_by_guid(&user.guid).await.unwrap().unwrap();
        let password_service = PasswordService::with_cost(4);
        assert!(password_service
            .verify("Secret1!", &stored.password_hash)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_reset_password_unknown_code() {
        let (f, _user) = fixture().await;
        let result = f
            .service
            .reset_password("ffffff", "NewPass1!", "NewPass1!")
            .await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_reset_password_consumes_token_and_invalidates_cache() {
        let (f, user) = fixture().await;
        f.cache.put(&keys::user_by_guid(&user.guid), "{}").await;

        f.service.request_recovery("alice@example.com").await.unwrap();
        let code = f.notifier.last_code().await.unwrap();

        f.service
            .reset_password(&code, "NewPass1!", "NewPass1!")
            .await
            .unwrap();

        // Token is single-use
        assert!(f.token_repo.is_empty().await);
        let again = f
            .service
            .reset_password(&code, "NewPass1!", "NewPass1!")
            .await;
        assert!(matches!(again, Err(DomainError::NotFound { .. })));

        // Per-guid cache entry was invalidated
        assert!(!f.cache.contains(&keys::user_by_guid(&user.guid)).await);

        // Password was rehashed
        let stored = f.user_repo.find_by_guid(&user.guid).await.unwrap().unwrap();
        let password_service = PasswordService::with_cost(4);
        assert!(password_service
            .verify("NewPass1!", &stored.password_hash)
            .await
            .unwrap());
        assert!(!password_service
            .verify("Secret1!", &stored.password_hash)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_token_expires_after_ttl() {
        let (f, _user) = fixture().await;
        f.service.request_recovery("alice@example.com").await.unwrap();
        let code = f.notifier.last_code().await.unwrap();

        f.clock.advance(Duration::seconds(121));

        let result = f
            .service
            .reset_password(&code, "NewPass1!", "NewPass1!")
            .await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));

        // The stale record was deleted lazily during the lookup
        assert!(f.token_repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_token_still_valid_just_inside_ttl() {
        let (f, _user) = fixture().await;
        f.service.request_recovery("alice@example.com").await.unwrap();
        let code = f.notifier.last_code().await.unwrap();

        f.clock.advance(Duration::seconds(119));

        f.service
            .reset_password(&code, "NewPass1!", "NewPass1!")
            .await
            .unwrap();
    }
}
