//! Backing stores for short-lived domain records.

pub mod recovery;

pub use recovery::InMemoryRecoveryTokenStore;
