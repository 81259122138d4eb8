//! User entity representing a registered identity in the directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to a user, checked by route authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Ordinary directory member
    User,
    /// Administrator with directory management rights
    Admin,
    /// Administrator allowed to manage other administrators
    SuperAdmin,
}

impl UserRole {
    /// Stable string form embedded in token claims
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
            UserRole::SuperAdmin => "SUPER_ADMIN",
        }
    }

    /// Parse the claim string form back into a role
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "USER" => Some(UserRole::User),
            "ADMIN" => Some(UserRole::Admin),
            "SUPER_ADMIN" => Some(UserRole::SuperAdmin),
            _ => None,
        }
    }
}

/// User entity representing a registered identity
///
/// The `guid` is the stable external identifier and never changes once
/// assigned. `email` and `phone_number` are unique across the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Globally unique, immutable external identifier
    pub guid: String,

    /// Display name
    pub name: String,

    /// Unique email address used for login and recovery delivery
    pub email: String,

    /// Optional unique phone number
    pub phone_number: Option<String>,

    /// Birth date normalized to UTC midnight
    pub birth_date: Option<DateTime<Utc>>,

    /// Bcrypt password hash; opaque and never serialized out
    #[serde(skip_serializing)]
    #[serde(default)]
    pub password_hash: String,

    /// Assigned role
    pub role: UserRole,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a freshly generated guid
    pub fn new(
        name: String,
        email: String,
        phone_number: Option<String>,
        birth_date: Option<DateTime<Utc>>,
        password_hash: String,
        role: UserRole,
    ) -> Self {
        let now = Utc::now();
        Self {
            guid: Uuid::new_v4().to_string(),
            name,
            email,
            phone_number,
            birth_date,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the password hash and stamps the update time
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Checks if the user holds any administrative role
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin | UserRole::SuperAdmin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            Some("+61400000000".to_string()),
            None,
            "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            UserRole::User,
        )
    }

    #[test]
    fn test_new_user_gets_guid_and_timestamps() {
        let user = sample_user();
        assert!(!user.guid.is_empty());
        assert_eq!(user.created_at, user.updated_at);
        assert_eq!(user.role, UserRole::User);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_guids_are_unique() {
        assert_ne!(sample_user().guid, sample_user().guid);
    }

    #[test]
    fn test_set_password_hash_bumps_updated_at() {
        let mut user = sample_user();
        let created = user.created_at;
        user.set_password_hash("$2b$12$vutsrqponmlkjihgfedcba".to_string());
        assert!(user.updated_at >= created);
        assert_eq!(user.password_hash, "$2b$12$vutsrqponmlkjihgfedcba");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let json = serde_json::to_string(&sample_user()).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("$2b$"));
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&UserRole::SuperAdmin).unwrap(),
            "\"SUPER_ADMIN\""
        );
        assert_eq!(UserRole::parse("ADMIN"), Some(UserRole::Admin));
        assert_eq!(UserRole::parse("root"), None);
    }

    #[test]
    fn test_admin_roles() {
        let mut user = sample_user();
        user.role = UserRole::Admin;
        assert!(user.is_admin());
        user.role = UserRole::SuperAdmin;
        assert!(user.is_admin());
    }
}
