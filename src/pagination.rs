//! This modules defines the common functionality for paging data.

use serde::{Deserialize, Serialize};

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The number of items on each page.
    pub page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            page_size: 5,
        }
    }
}

impl PaginationConfig {
    /// Interpret the raw `page` query parameter.
    ///
    /// Missing, malformed and zero page numbers fall back to
    /// [PaginationConfig::default_page].
    pub fn resolve_page(&self, raw_page: Option<&str>) -> u64 {
        raw_page
            .and_then(|page| page.trim().parse::<u64>().ok())
            .filter(|page| *page > 0)
            .unwrap_or(self.default_page)
    }

    /// The number of items to skip to reach `page`.
    pub fn offset(&self, page: u64) -> u64 {
        page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

/// One page of a larger result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The 1-based number of this page.
    pub current_page: u64,
    /// The items on this page.
    pub data: Vec<T>,
    /// The 1-based position of the first item on this page, `None` if the page is empty.
    pub from: Option<u64>,
    /// The number of the last page, at least 1.
    pub last_page: u64,
    /// The maximum number of items per page.
    pub per_page: u64,
    /// The 1-based position of the last item on this page, `None` if the page is empty.
    pub to: Option<u64>,
    /// The number of items across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    /// Wrap the items of `current_page` given the `total` number of items.
    pub fn new(data: Vec<T>, current_page: u64, per_page: u64, total: u64) -> Self {
        let last_page = if per_page == 0 {
            1
        } else {
            total.div_ceil(per_page).max(1)
        };

        let (from, to) = if data.is_empty() {
            (None, None)
        } else {
            let from = current_page.saturating_sub(1) * per_page + 1;
            (Some(from), Some(from + data.len() as u64 - 1))
        };

        Self {
            current_page,
            data,
            from,
            last_page,
            per_page,
            to,
            total,
        }
    }
}
