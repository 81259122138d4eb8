//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserRole;

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 900;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_SECONDS: i64 = 604_800;

/// JWT issuer
pub const JWT_ISSUER: &str = "identra";

/// JWT audience
pub const JWT_AUDIENCE: &str = "identra-api";

/// Class of a session token
///
/// Access tokens authorize protected requests; refresh tokens are exchanged
/// only for a new access token and never authorize resource access directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenUse {
    Access,
    Refresh,
}

/// Identity payload embedded in every session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Stable external identifier of the user
    pub guid: String,

    /// Email at issuance time
    pub email: String,

    /// Role at issuance time
    pub role: UserRole,
}

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user guid)
    pub sub: String,

    /// Email of the subject
    pub email: String,

    /// Role of the subject
    pub role: UserRole,

    /// Token class (access or refresh)
    pub token_use: TokenUse,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for the given session payload and token class
    ///
    /// # Arguments
    ///
    /// * `session` - Identity payload to embed
    /// * `token_use` - Token class (access or refresh)
    /// * `expiry_seconds` - Validity window from now
    /// * `issuer` - Issuer claim value
    /// * `audience` - Audience claim value
    pub fn new(
        session: SessionClaims,
        token_use: TokenUse,
        expiry_seconds: i64,
        issuer: &str,
        audience: &str,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);

        Self {
            sub: session.guid,
            email: session.email,
            role: session.role,
            token_use,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Extracts the session payload carried by these claims
    pub fn session(&self) -> SessionClaims {
        SessionClaims {
            guid: self.sub.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Token pair returned to the client on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair with the configured expiry windows
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: i64,
        refresh_expires_in: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}
