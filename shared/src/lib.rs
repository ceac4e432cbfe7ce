//! Shared types for the storefront
//!
//! Wire models returned by the store backend, the list query used to page
//! through them, and the pagination arithmetic shared by every client.

pub mod models;
pub mod query;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{AddToCartRequest, Comment, GenreChoice, Product, Rating};
pub use query::ListQuery;
pub use response::{ErrorBody, Page, Pagination};
