//! This module defines the common functionality for paging data.

use serde::Serialize;

use crate::Error;

/// A request for a single page of a larger result set.
///
/// Pages are zero-based, matching the `page` query parameter on the list
/// endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    size: u64,
}

impl PageRequest {
    /// Create a request for the zero-based `page` with `size` items per page.
    ///
    /// # Errors
    ///
    /// This function will return:
    /// - [Error::InvalidPageSize] if `size` is zero or too large to bind as a
    ///   SQL integer.
    /// - [Error::NotFound] if the page's offset overflows a SQL integer. A
    ///   page starting that far in can never address a row.
    pub fn new(page: u64, size: u64) -> Result<Self, Error> {
        if size == 0 || size > i64::MAX as u64 {
            return Err(Error::InvalidPageSize);
        }

        match page.checked_mul(size) {
            Some(offset) if offset <= i64::MAX as u64 => Ok(Self { page, size }),
            _ => Err(Error::NotFound),
        }
    }

    /// The zero-based page number.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// The maximum number of items on the page.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The number of rows to skip to reach the start of the page.
    pub fn offset(&self) -> u64 {
        self.page * self.size
    }
}

/// A bounded slice of a larger result set plus total-count metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// The zero-based page number that was requested.
    pub page: u64,
    /// The requested page size. The page holds at most this many items.
    pub size: u64,
    /// The total number of items across all pages.
    pub total_items: u64,
    /// The total number of pages.
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Create a page of `items` for `request`, where `total_items` is the
    /// number of items matching the query across all pages.
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        Self {
            items,
            page: request.page(),
            size: request.size(),
            total_items,
            total_pages: total_items.div_ceil(request.size()),
        }
    }

    /// Whether this page contains no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Convert each item on the page with `f`, keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        pagination::{Page, PageRequest},
    };

    #[test]
    fn page_request_rejects_zero_size() {
        let request = PageRequest::new(0, 0);

        assert_eq!(request, Err(Error::InvalidPageSize));
    }

    #[test]
    fn page_request_rejects_oversized_size() {
        let request = PageRequest::new(0, u64::MAX);

        assert_eq!(request, Err(Error::InvalidPageSize));
    }

    #[test]
    fn page_request_rejects_page_past_representable_offset() {
        let request = PageRequest::new(u64::MAX, 10);

        assert_eq!(request, Err(Error::NotFound));
    }

    #[test]
    fn offset_accepts_the_largest_representable_page() {
        let request = PageRequest::new(i64::MAX as u64, 1).unwrap();

        assert_eq!(request.offset(), i64::MAX as u64);
    }

    #[test]
    fn offset_skips_previous_pages() {
        let request = PageRequest::new(3, 10).unwrap();

        assert_eq!(request.offset(), 30);
    }

    #[test]
    fn total_pages_rounds_up() {
        let request = PageRequest::new(0, 10).unwrap();

        let page = Page::new(vec![1, 2, 3], request, 21);

        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn total_pages_is_zero_for_no_matches() {
        let request = PageRequest::new(0, 10).unwrap();

        let page: Page<i64> = Page::new(vec![], request, 0);

        assert_eq!(page.total_pages, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn map_converts_items_and_keeps_metadata() {
        let request = PageRequest::new(1, 2).unwrap();
        let page = Page::new(vec![1, 2], request, 5);

        let mapped = page.map(|item| item.to_string());

        assert_eq!(mapped.items, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.page, 1);
        assert_eq!(mapped.size, 2);
        assert_eq!(mapped.total_items, 5);
        assert_eq!(mapped.total_pages, 3);
    }
}
