//! API Response types
//!
//! The backend's page-number pagination envelope and the page arithmetic
//! built on top of it.

use serde::{Deserialize, Serialize};

/// Paginated list envelope
///
/// ```json
/// {
///     "count": 23,
///     "next": "http://127.0.0.1:8000/api/products/?page=2",
///     "previous": null,
///     "results": [ ... ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of matching items across all pages
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Create a page without navigation links
    pub fn new(count: u64, results: Vec<T>) -> Self {
        Self {
            count,
            next: None,
            previous: None,
            results,
        }
    }
}

/// Error body sent with non-success statuses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    /// The most specific human-readable text the body carries
    pub fn text(&self) -> Option<&str> {
        self.detail.as_deref().or(self.message.as_deref())
    }
}

/// Number of pages needed to show `total_items` with `page_size` per page.
///
/// Never less than 1, so an empty result still has a page to show. A zero
/// page size is treated as 1.
pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    let pages = if total_items % page_size == 0 {
        total_items / page_size
    } else {
        total_items / page_size + 1
    };
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

/// Pagination metadata
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub page_size: u32,
    /// Total number of items
    pub total_items: u64,
    /// Total number of pages (at least 1)
    pub total_pages: u32,
}

impl Pagination {
    /// Create pagination metadata; `page` is clamped into `[1, total_pages]`
    pub fn new(page: u32, page_size: u32, total_items: u64) -> Self {
        let total_pages = total_pages(total_items, page_size);
        Self {
            page: page.clamp(1, total_pages),
            page_size: page_size.max(1),
            total_items,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_with_remainder() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn test_total_pages_exact_multiple() {
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(10, 10), 1);
    }

    #[test]
    fn test_total_pages_never_below_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(0, 1), 1);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_total_pages_matches_ceiling() {
        for page_size in 1..=12u32 {
            for total in 0..=100u64 {
                let expected = ((total + u64::from(page_size) - 1) / u64::from(page_size)).max(1);
                assert_eq!(u64::from(total_pages(total, page_size)), expected);
            }
        }
    }

    #[test]
    fn test_pagination_clamps_page() {
        let pagination = Pagination::new(9, 10, 23);
        assert_eq!(pagination.total_pages, 3);
        assert_eq!(pagination.page, 3);

        let pagination = Pagination::new(0, 10, 23);
        assert_eq!(pagination.page, 1);
    }

    #[test]
    fn test_decode_page_envelope() {
        let json = r#"{"count": 2, "next": null, "previous": null, "results": [1, 2]}"#;
        let page: Page<u8> = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 2);
        assert_eq!(page.results, vec![1, 2]);
        assert!(page.next.is_none());
    }

    #[test]
    fn test_error_body_prefers_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message": "Invalid Request", "detail": "Not found."}"#)
                .unwrap();
        assert_eq!(body.text(), Some("Not found."));

        let body: ErrorBody = serde_json::from_str(r#"{"message": "Invalid Request"}"#).unwrap();
        assert_eq!(body.text(), Some("Invalid Request"));
    }
}
