//! User repository trait defining the interface to the persistent directory.
//!
//! The directory itself is an external collaborator; this trait is the only
//! surface the service layer sees, keeping query mechanics out of the domain.

use async_trait::async_trait;

use crate::domain::entities::user::{User, UserRole};
use crate::errors::DomainError;

/// Filter for counting and listing directory entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    /// Restrict to a single role
    pub role: Option<UserRole>,

    /// Case-insensitive substring match on name or email
    pub search: Option<String>,
}

impl UserQuery {
    /// Query for all entries of one role
    pub fn by_role(role: UserRole) -> Self {
        Self {
            role: Some(role),
            search: None,
        }
    }

    /// Add a search term to the query
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Repository trait for user persistence operations
///
/// Implementations handle the actual store while the domain layer stays
/// storage-agnostic. All lookups return `Ok(None)` rather than an error when
/// nothing matches; mapping absence to a failure is the caller's decision.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their stable external identifier
    async fn find_by_guid(&self, guid: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// Fails with a validation error when the email or phone number is
    /// already registered.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user, matched by guid
    ///
    /// Returns `Ok(None)` when no user with that guid exists.
    async fn update(&self, user: User) -> Result<Option<User>, DomainError>;

    /// Delete a user by guid, returning the removed record if present
    async fn delete_by_guid(&self, guid: &str) -> Result<Option<User>, DomainError>;

    /// Count users matching a query
    async fn count_matching(&self, query: &UserQuery) -> Result<u64, DomainError>;

    /// List users matching a query with offset/limit windowing
    async fn list_matching(
        &self,
        query: &UserQuery,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<User>, DomainError>;
}
