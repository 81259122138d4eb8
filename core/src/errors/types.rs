//! Domain-specific error types for authentication and token operations.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid email or password")]
    InvalidCredential,

    #[error("Insufficient role for this operation")]
    InsufficientRole,
}

/// Token-related errors
///
/// All of these surface to callers as a `TokenInvalid`-class failure;
/// the variants keep the cause visible in logs and tests.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Wrong token class for this operation")]
    WrongTokenClass,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
