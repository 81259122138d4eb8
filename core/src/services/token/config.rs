//! Token service configuration.

use id_shared::config::JwtConfig;

use crate::domain::entities::token::{
    ACCESS_TOKEN_EXPIRY_SECONDS, JWT_AUDIENCE, JWT_ISSUER, REFRESH_TOKEN_EXPIRY_SECONDS,
};

/// Configuration for JWT issuance and validation
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HMAC secret used for signing
    pub jwt_secret: String,

    /// Access token validity in seconds
    pub access_expiry_seconds: i64,

    /// Refresh token validity in seconds
    pub refresh_expiry_seconds: i64,

    /// Issuer claim
    pub issuer: String,

    /// Audience claim
    pub audience: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("your-secret-key-change-in-production"),
            access_expiry_seconds: ACCESS_TOKEN_EXPIRY_SECONDS,
            refresh_expiry_seconds: REFRESH_TOKEN_EXPIRY_SECONDS,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret,
            access_expiry_seconds: config.access_token_expiry,
            refresh_expiry_seconds: config.refresh_token_expiry,
            issuer: config.issuer,
            audience: config.audience,
        }
    }
}
