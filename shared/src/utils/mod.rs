//! Common utility functions

pub mod time;
pub mod validation;

// Re-export commonly used utilities
pub use time::*;
pub use validation::*;
