//! Email delivery adapters for recovery codes.

pub mod mock_email;

pub use mock_email::MockEmailNotifier;
