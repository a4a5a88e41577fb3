//! Page slicing for ordered player listings.
//!
//! A page that starts at or past the end of the collection, or has size 0,
//! is empty. Paging never fails.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_NUMBER: u32 = 0;
pub const DEFAULT_PAGE_SIZE: u32 = 3;

/// Zero-based page request. Absent values fall back to the defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageRequest {
    pub fn new(page_number: Option<u32>, page_size: Option<u32>) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    pub fn page_number(&self) -> u32 {
        self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Index range `[start, end)` of this page within `len` items.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let size = self.page_size() as usize;
        let start = (self.page_number() as usize).saturating_mul(size).min(len);
        let end = start.saturating_add(size).min(len);
        (start, end)
    }

    pub fn slice<T>(&self, mut items: Vec<T>) -> Vec<T> {
        let (start, end) = self.bounds(items.len());
        items.truncate(end);
        items.drain(..start);
        items
    }
}
