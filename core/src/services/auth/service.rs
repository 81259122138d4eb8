//! Credential authentication service.

use std::sync::Arc;
use tracing::{debug, warn};

use id_shared::utils::validation::mask_email;

use crate::domain::entities::token::{SessionClaims, TokenPair};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::password::PasswordService;
use crate::services::token::TokenService;

/// Service validating email/password pairs and issuing session tokens
pub struct AuthService<U: UserRepository> {
    user_repository: Arc<U>,
    password_service: Arc<PasswordService>,
    token_service: Arc<TokenService>,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Directory used to resolve identities
    /// * `password_service` - Bcrypt hashing/verification
    /// * `token_service` - JWT issuance and validation
    pub fn new(
        user_repository: Arc<U>,
        password_service: Arc<PasswordService>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repository,
            password_service,
            token_service,
        }
    }

    /// Authenticate an email/password pair and issue a token pair
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Access + refresh tokens carrying {guid, email, role}
    /// * `Err(AuthError::UserNotFound)` - No identity with that email
    /// * `Err(AuthError::InvalidCredential)` - Password mismatch
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<TokenPair> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let valid = self
            .password_service
            .verify(password, &user.password_hash)
            .await?;
        if !valid {
            warn!(email = %mask_email(email), "login rejected: password mismatch");
            return Err(AuthError::InvalidCredential.into());
        }

        debug!(guid = %user.guid, "login succeeded");
        self.token_service.issue_pair(SessionClaims {
            guid: user.guid,
            email: user.email,
            role: user.role,
        })
    }

    /// Exchange a valid refresh token for a new access token
    ///
    /// The embedded identity is re-read from the directory so a role change
    /// since issuance is honored. The refresh token itself is not rotated.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Fresh access token
    /// * `Err(TokenError)` - Refresh token unsigned, expired, or wrong class
    /// * `Err(AuthError::UserNotFound)` - The identity no longer exists
    pub async fn refresh_access_token(&self, refresh_token: &str) -> DomainResult<String> {
        let claims = self.token_service.verify_refresh_token(refresh_token)?;

        let user = self
            .user_repository
            .find_by_guid(&claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.token_service.issue_access_token(SessionClaims {
            guid: user.guid,
            email: user.email,
            role: user.role,
        })
    }
}
