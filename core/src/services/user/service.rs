//! User directory service with a read-through cache.
//!
//! Cache policy:
//! - `users:all` holds the full ordinary-role listing, no TTL
//! - `users:page:*` holds paginated/searched listings, short TTL
//! - `users:guid:*` holds single lookups, no TTL, invalidated on mutation
//!
//! Mutations invalidate only the per-guid entry. The aggregate and paginated
//! entries are left to age out (or persist, for `users:all`, until restart),
//! an accepted staleness window pinned by the tests below.
//!
//! `User::password_hash` is marked `skip_serializing`, so hashes never enter
//! the cache; credential-sensitive paths always read the repository directly.

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use id_shared::types::{PaginatedResponse, Pagination};
use id_shared::utils::time::birth_date_to_utc_midnight;
use id_shared::utils::validation::is_valid_email;

use crate::domain::entities::user::{User, UserRole};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{UserQuery, UserRepository};
use crate::services::cache::{keys, CacheService};
use crate::services::password::PasswordService;

use super::types::{CreateUserRequest, UpdateUserRequest};

/// Directory operations over the user repository, fronted by the cache
pub struct UserService<U: UserRepository, C: CacheService> {
    user_repository: Arc<U>,
    cache: Arc<C>,
    password_service: Arc<PasswordService>,
    listing_ttl: Duration,
}

impl<U: UserRepository, C: CacheService> UserService<U, C> {
    /// Create a new user service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Persistent directory
    /// * `cache` - Read-through cache layer
    /// * `password_service` - Hashing for create/update password paths
    /// * `listing_ttl` - TTL applied to paginated listing entries
    pub fn new(
        user_repository: Arc<U>,
        cache: Arc<C>,
        password_service: Arc<PasswordService>,
        listing_ttl: Duration,
    ) -> Self {
        Self {
            user_repository,
            cache,
            password_service,
            listing_ttl,
        }
    }

    /// Register a new user with the given role
    pub async fn create_user(&self, request: CreateUserRequest, role: UserRole) -> DomainResult<User> {
        if !is_valid_email(&request.email) {
            return Err(DomainError::validation("Invalid email format"));
        }

        let birth_date = match request.birth_date.as_deref() {
            Some(raw) => Some(
                birth_date_to_utc_midnight(raw)
                    .ok_or_else(|| DomainError::validation("Invalid birth date format"))?,
            ),
            None => None,
        };

        let password_hash = self.password_service.hash(&request.password).await?;
        let user = User::new(
            request.name,
            request.email,
            request.phone_number,
            birth_date,
            password_hash,
            role,
        );

        self.user_repository.create(user).await
    }

    /// List every ordinary-role user, served through the aggregate cache entry
    pub async fn find_all_users(&self) -> DomainResult<Vec<User>> {
        if let Some(cached) = self.cache.get(keys::ALL_USERS).await? {
            debug!(key = keys::ALL_USERS, "cache hit");
            return decode(&cached);
        }

        let query = UserQuery::by_role(UserRole::User);
        let users = self
            .user_repository
            .list_matching(&query, 0, u32::MAX)
            .await?;

        self.cache
            .set(keys::ALL_USERS, &encode(&users)?, None)
            .await?;
        Ok(users)
    }

    /// List ordinary-role users with pagination and optional search
    pub async fn find_users_page(
        &self,
        pagination: Pagination,
        search: Option<&str>,
    ) -> DomainResult<PaginatedResponse<User>> {
        let key = keys::user_page(pagination.page, pagination.per_page, search);
        if let Some(cached) = self.cache.get(&key).await? {
            debug!(key = %key, "cache hit");
            return decode(&cached);
        }

        let mut query = UserQuery::by_role(UserRole::User);
        if let Some(term) = search {
            query = query.with_search(term);
        }

        let total = self.user_repository.count_matching(&query).await?;
        let users = self
            .user_repository
            .list_matching(&query, pagination.offset(), pagination.limit())
            .await?;
        let response = PaginatedResponse::new(users, total, pagination);

        self.cache
            .set(&key, &encode(&response)?, Some(self.listing_ttl))
            .await?;
        Ok(response)
    }

    /// Fetch a single user by guid through the per-guid cache entry
    pub async fn find_user_by_guid(&self, guid: &str) -> DomainResult<User> {
        let key = keys::user_by_guid(guid);
        if let Some(cached) = self.cache.get(&key).await? {
            debug!(key = %key, "cache hit");
            return decode(&cached);
        }

        let user = self
            .user_repository
            .find_by_guid(guid)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        self.cache.set(&key, &encode(&user)?, None).await?;
        Ok(user)
    }

    /// Update profile fields by guid and invalidate the per-guid cache entry
    pub async fn update_user_by_guid(
        &self,
        guid: &str,
        request: UpdateUserRequest,
    ) -> DomainResult<User> {
        let mut user = self
            .user_repository
            .find_by_guid(guid)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        if let Some(name) = request.name {
            user.name = name;
        }
        if let Some(email) = request.email {
            if !is_valid_email(&email) {
                return Err(DomainError::validation("Invalid email format"));
            }
            user.email = email;
        }
        if let Some(phone_number) = request.phone_number {
            user.phone_number = Some(phone_number);
        }
        if let Some(raw) = request.birth_date.as_deref() {
            user.birth_date = Some(
                birth_date_to_utc_midnight(raw)
                    .ok_or_else(|| DomainError::validation("Invalid birth date format"))?,
            );
        }
        user.updated_at = chrono::Utc::now();

        let updated = self
            .user_repository
            .update(user)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        self.cache.delete(&keys::user_by_guid(guid)).await?;
        Ok(updated)
    }

    /// Delete a user by guid and invalidate the per-guid cache entry
    pub async fn delete_user_by_guid(&self, guid: &str) -> DomainResult<()> {
        self.user_repository
            .delete_by_guid(guid)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        self.cache.delete(&keys::user_by_guid(guid)).await?;
        Ok(())
    }

    /// Change a user's password after verifying the existing one
    pub async fn change_password(
        &self,
        guid: &str,
        existing_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> DomainResult<()> {
        // Repository read, not cache: cached entries carry no password hash
        let user = self
            .user_repository
            .find_by_guid(guid)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        let valid = self
            .password_service
            .verify(existing_password, &user.password_hash)
            .await?;
        if !valid {
            return Err(AuthError::InvalidCredential.into());
        }

        self.update_password_by_guid(guid, new_password, confirm_password)
            .await
    }

    /// Rehash and persist a new password, then invalidate the per-guid entry
    ///
    /// The mismatch check runs before any persistence so a failed confirm
    /// leaves both the directory and the cache untouched.
    pub async fn update_password_by_guid(
        &self,
        guid: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> DomainResult<()> {
        if new_password != confirm_password {
            return Err(DomainError::validation(
                "New password and confirm password do not match",
            ));
        }

        let mut user = self
            .user_repository
            .find_by_guid(guid)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        let password_hash = self.password_service.hash(new_password).await?;
        user.set_password_hash(password_hash);

        self.user_repository
            .update(user)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        self.cache.delete(&keys::user_by_guid(guid)).await?;
        Ok(())
    }
}

fn encode<T: serde::Serialize>(value: &T) -> DomainResult<String> {
    serde_json::to_string(value).map_err(|e| DomainError::Internal {
        message: format!("Cache serialization failed: {}", e),
    })
}

fn decode<T: serde::de::DeserializeOwned>(raw: &str) -> DomainResult<T> {
    serde_json::from_str(raw).map_err(|e| DomainError::Internal {
        message: format!("Cache deserialization failed: {}", e),
    })
}
