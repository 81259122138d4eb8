//! Role-based route authorization.
//!
//! Each protected operation declares the set of roles allowed to call it and
//! passes that policy in explicitly; nothing is discovered via reflection or
//! attached metadata.

use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::token::SessionClaims;
use crate::domain::entities::user::UserRole;
use crate::errors::{AuthError, DomainResult};
use crate::services::token::TokenService;

/// Verifies a presented access token against a per-operation role policy
pub struct RoleAuthorizer {
    token_service: Arc<TokenService>,
}

impl RoleAuthorizer {
    /// Create a new authorizer backed by a token service
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }

    /// Verify the token and check its role claim against the policy
    ///
    /// An empty `required_roles` slice means any authenticated identity may
    /// proceed. The check is ANY-match: membership in at least one required
    /// role is sufficient.
    ///
    /// # Returns
    ///
    /// * `Ok(SessionClaims)` - Claims for the caller to scope its work with
    /// * `Err(TokenError)` - Token unsigned, expired, malformed, or refresh-class
    /// * `Err(AuthError::InsufficientRole)` - Authenticated but not permitted
    pub fn authorize(
        &self,
        access_token: &str,
        required_roles: &[UserRole],
    ) -> DomainResult<SessionClaims> {
        let claims = self.token_service.verify_access_token(access_token)?;

        if !required_roles.is_empty() && !required_roles.contains(&claims.role) {
            debug!(
                guid = %claims.sub,
                role = claims.role.as_str(),
                "authorization rejected: role not in policy"
            );
            return Err(AuthError::InsufficientRole.into());
        }

        Ok(claims.session())
    }
}
