//! Type definitions shared across server crates

pub mod pagination;

pub use pagination::{PaginatedResponse, Pagination, PaginationMeta};
