//! Repository interfaces consumed by the service layer.
//!
//! The persistent user directory and the recovery-token store live behind
//! these traits; in-memory mocks ship alongside for tests and development.

pub mod recovery;
pub mod user;

pub use recovery::{MockRecoveryTokenRepository, RecoveryTokenRepository};
pub use user::{MockUserRepository, UserQuery, UserRepository};
