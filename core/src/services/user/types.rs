//! Request types for directory operations.

use serde::{Deserialize, Serialize};

/// Fields for registering a new user
///
/// `birth_date` is a `YYYY-MM-DD` string normalized to UTC midnight on
/// creation. The plaintext password is hashed before anything is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub birth_date: Option<String>,
    pub password: String,
}

/// Partial update for an existing user; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub birth_date: Option<String>,
}
