//! Paginated page container

use serde::{Deserialize, Serialize};

/// One page of results for a list endpoint.
///
/// Pagination is page-number based: `next_page`/`previous_page` carry the
/// neighboring page numbers when they exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Number of elements matching the query
    pub count: u64,
    /// Number of the next page, if any
    pub next_page: Option<u64>,
    /// Number of the previous page, if any
    pub previous_page: Option<u64>,
    /// Results on this page
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Whether another page follows this one
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    /// Whether this page is the first
    pub fn is_first(&self) -> bool {
        self.previous_page.is_none()
    }
}
