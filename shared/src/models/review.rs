//! Customer comments and ratings attached to a book

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Author's user id
    pub user: i64,
    #[serde(default)]
    pub username: Option<String>,
    /// Title of the commented item
    pub item: String,
    pub timestamp: DateTime<Utc>,
    pub content: String,
    #[serde(default)]
    pub book_title: Option<String>,
}

/// Customer rating (1..=10)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user: i64,
    #[serde(default)]
    pub username: Option<String>,
    pub item: String,
    pub timestamp: DateTime<Utc>,
    pub rating: i32,
    #[serde(default)]
    pub book_title: Option<String>,
}
