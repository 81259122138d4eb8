//! Error types for the Identra core crate.

use thiserror::Error;

pub mod types;

pub use types::{AuthError, TokenError};

/// Top-level error type bridging all domain failures
///
/// Every fallible operation in this crate surfaces one of these variants;
/// the Notifier's delivery failure is the single, deliberate exception to
/// fail-loud (it is logged and swallowed by the recovery flow).
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Shorthand constructor for a not-found failure
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand constructor for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridging_from_auth_error() {
        let err: DomainError = AuthError::InvalidCredential.into();
        assert!(matches!(err, DomainError::Auth(AuthError::InvalidCredential)));
    }

    #[test]
    fn test_bridging_from_token_error() {
        let err: DomainError = TokenError::TokenExpired.into();
        assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
    }

    #[test]
    fn test_not_found_message() {
        let err = DomainError::not_found("User");
        assert_eq!(err.to_string(), "Resource not found: User");
    }
}
