//! Mock implementation of UserRepository for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::{UserQuery, UserRepository};

/// In-memory user repository keyed by guid
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn matches(user: &User, query: &UserQuery) -> bool {
        if let Some(role) = query.role {
            if user.role != role {
                return false;
            }
        }
        if let Some(ref search) = query.search {
            let needle = search.to_lowercase();
            if !user.name.to_lowercase().contains(&needle)
                && !user.email.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_guid(&self, guid: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(guid).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::validation("Email already registered"));
        }
        if let Some(ref phone) = user.phone_number {
            if users
                .values()
                .any(|u| u.phone_number.as_deref() == Some(phone.as_str()))
            {
                return Err(DomainError::validation("Phone number already registered"));
            }
        }

        users.insert(user.guid.clone(), user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.guid) {
            return Ok(None);
        }
        if users
            .values()
            .any(|u| u.guid != user.guid && u.email == user.email)
        {
            return Err(DomainError::validation("Email already registered"));
        }
        if let Some(ref phone) = user.phone_number {
            if users
                .values()
                .any(|u| u.guid != user.guid && u.phone_number.as_deref() == Some(phone.as_str()))
            {
                return Err(DomainError::validation("Phone number already registered"));
            }
        }

        users.insert(user.guid.clone(), user.clone());
        Ok(Some(user))
    }

    async fn delete_by_guid(&self, guid: &str) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(guid))
    }

    async fn count_matching(&self, query: &UserQuery) -> Result<u64, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().filter(|u| Self::matches(u, query)).count() as u64)
    }

    async fn list_matching(
        &self,
        query: &UserQuery,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        let mut matching: Vec<User> = users
            .values()
            .filter(|u| Self::matches(u, query))
            .cloned()
            .collect();
        // Stable ordering for deterministic pagination
        matching.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.guid.cmp(&b.guid)));
        Ok(matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}
