pub mod service;

pub use service::PasswordService;
