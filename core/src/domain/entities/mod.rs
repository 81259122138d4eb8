//! Domain entities representing core business objects.

pub mod recovery_token;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use recovery_token::{RecoveryToken, RECOVERY_CODE_LENGTH, RECOVERY_TOKEN_TTL_SECONDS};
pub use token::{
    Claims, SessionClaims, TokenPair, TokenUse, ACCESS_TOKEN_EXPIRY_SECONDS,
    JWT_AUDIENCE, JWT_ISSUER, REFRESH_TOKEN_EXPIRY_SECONDS,
};
pub use user::{User, UserRole};
