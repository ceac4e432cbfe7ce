//! List query types
//!
//! One `ListQuery` describes one product list request: the page plus the
//! optional browse-by filter and sort key.

use serde::{Deserialize, Serialize};

/// Value the browse endpoint expects for an unset parameter
pub const UNSET_PARAM: &str = "null";

/// Product list query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Page number (1-based)
    pub page: u32,
    /// Browse-by value, e.g. a genre code such as "FA"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Sort key, e.g. "title", "price", "rating"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl ListQuery {
    /// Unfiltered, unsorted query for one page
    pub fn page(page: u32) -> Self {
        Self {
            page: page.max(1),
            filter: None,
            sort: None,
        }
    }

    /// Set the browse-by filter
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set the sort key
    pub fn order_by(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Whether this query needs the browse endpoint rather than the plain list
    pub fn is_browse(&self) -> bool {
        self.filter.is_some() || self.sort.is_some()
    }

    /// Query-string parameters for the browse endpoint
    pub fn browse_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("browseBy", self.filter.clone().unwrap_or_else(|| UNSET_PARAM.to_string())),
            ("sortBy", self.sort.clone().unwrap_or_else(|| UNSET_PARAM.to_string())),
            ("page", self.page.to_string()),
        ]
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::page(1)
    }
}
