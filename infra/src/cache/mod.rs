//! Cache backends implementing the `CacheService` trait.

pub mod memory;
pub mod redis;

pub use memory::MemoryCache;
pub use redis::RedisCache;
