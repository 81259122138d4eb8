//! JWT token issuance and verification.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, SessionClaims, TokenPair, TokenUse};
use crate::errors::{DomainError, DomainResult, TokenError};

/// Service for issuing and verifying signed session tokens
///
/// Tokens are HS256 JWTs carrying `SessionClaims` plus a `token_use` class
/// claim. Access and refresh tokens share the signing key; the class claim
/// keeps them from standing in for each other.
pub struct TokenService {
    config: super::TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from configuration
    pub fn new(config: super::TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues an access/refresh token pair for a session
    pub fn issue_pair(&self, session: SessionClaims) -> DomainResult<TokenPair> {
        let access_token = self.issue(session.clone(), TokenUse::Access)?;
        let refresh_token = self.issue(session, TokenUse::Refresh)?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_expiry_seconds,
            self.config.refresh_expiry_seconds,
        ))
    }

    /// Issues a single access token for a session
    pub fn issue_access_token(&self, session: SessionClaims) -> DomainResult<String> {
        self.issue(session, TokenUse::Access)
    }

    fn issue(&self, session: SessionClaims, token_use: TokenUse) -> DomainResult<String> {
        let expiry_seconds = match token_use {
            TokenUse::Access => self.config.access_expiry_seconds,
            TokenUse::Refresh => self.config.refresh_expiry_seconds,
        };
        let claims = Claims::new(
            session,
            token_use,
            expiry_seconds,
            &self.config.issuer,
            &self.config.audience,
        );

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies an access token's signature, expiry, and class
    pub fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        let claims = self.decode_claims(token)?;
        if claims.token_use != TokenUse::Access {
            return Err(DomainError::Token(TokenError::WrongTokenClass));
        }
        Ok(claims)
    }

    /// Verifies a refresh token's signature, expiry, and class
    pub fn verify_refresh_token(&self, token: &str) -> DomainResult<Claims> {
        let claims = self.decode_claims(token)?;
        if claims.token_use != TokenUse::Refresh {
            return Err(DomainError::Token(TokenError::WrongTokenClass));
        }
        Ok(claims)
    }

    fn decode_claims(&self, token: &str) -> DomainResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                let kind = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::InvalidTokenFormat,
                };
                DomainError::Token(kind)
            })?;

        Ok(token_data.claims)
    }
}
