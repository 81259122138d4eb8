//! # Identra Core
//!
//! Core business logic and domain layer for the Identra backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the application
//! architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::recovery_token::RecoveryToken;
pub use domain::entities::token::{Claims, SessionClaims, TokenPair, TokenUse};
pub use domain::entities::user::{User, UserRole};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{
    MockRecoveryTokenRepository, MockUserRepository, RecoveryTokenRepository, UserQuery,
    UserRepository,
};
pub use services::{
    AuthService, CacheService, Clock, Notifier, PasswordService, RecoveryReaper, RecoveryService,
    RoleAuthorizer, SystemClock, TokenService, TokenServiceConfig, UserService,
};
