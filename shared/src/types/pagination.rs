//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Minimum allowed items per page
pub const MIN_PER_PAGE: u32 = 1;

/// Maximum allowed items per page
pub const MAX_PER_PAGE: u32 = 100;

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl Pagination {
    /// Create a new pagination with sanitized values
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(MIN_PER_PAGE, MAX_PER_PAGE),
        }
    }

    /// Calculate the offset for store queries
    pub fn offset(&self) -> u32 {
        (self.page.saturating_sub(1)) * self.per_page
    }

    /// Get the limit for store queries
    pub fn limit(&self) -> u32 {
        self.per_page
    }

    /// Check if this is the first page
    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

/// Metadata accompanying a paginated listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Total number of pages for the query
    pub total_pages: u32,

    /// Total number of matching items across all pages
    pub total_data: u64,

    /// Number of items in this page
    pub total_data_per_page: u32,

    /// Current page number
    pub page: u32,

    /// Requested page size
    pub per_page: u32,
}

impl PaginationMeta {
    /// Build metadata from a total count and the page actually returned
    pub fn new(total_data: u64, page_len: usize, pagination: Pagination) -> Self {
        let total_pages = if total_data == 0 {
            0
        } else {
            ((total_data + pagination.per_page as u64 - 1) / pagination.per_page as u64) as u32
        };
        Self {
            total_pages,
            total_data,
            total_data_per_page: page_len as u32,
            page: pagination.page,
            per_page: pagination.per_page,
        }
    }
}

/// Paginated response wrapper with metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The actual data items
    pub data: Vec<T>,

    /// Pagination metadata
    pub meta: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    /// Wrap a page of items with computed metadata
    pub fn new(data: Vec<T>, total_data: u64, pagination: Pagination) -> Self {
        let meta = PaginationMeta::new(total_data, data.len(), pagination);
        Self { data, meta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_calculation() {
        let pagination = Pagination::new(3, 10);
        assert_eq!(pagination.offset(), 20);
        assert_eq!(pagination.limit(), 10);
        assert!(!pagination.is_first_page());
    }

    #[test]
    fn test_page_floor_and_per_page_clamp() {
        let pagination = Pagination::new(0, 500);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.per_page, MAX_PER_PAGE);
    }

    #[test]
    fn test_meta_total_pages_rounds_up() {
        let meta = PaginationMeta::new(21, 10, Pagination::new(1, 10));
        assert_eq!(meta.total_pages, 3);
        assert_eq!(meta.total_data, 21);
        assert_eq!(meta.total_data_per_page, 10);
    }

    #[test]
    fn test_meta_empty_result() {
        let meta = PaginationMeta::new(0, 0, Pagination::default());
        assert_eq!(meta.total_pages, 0);
        assert_eq!(meta.total_data_per_page, 0);
    }

    #[test]
    fn test_paginated_response_wrapping() {
        let response = PaginatedResponse::new(vec!["a", "b"], 5, Pagination::new(1, 2));
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.meta.total_pages, 3);
    }
}
