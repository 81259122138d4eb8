pub mod reaper;
pub mod service;
pub mod traits;

pub use reaper::RecoveryReaper;
pub use service::RecoveryService;
pub use traits::Notifier;
