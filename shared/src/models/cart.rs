//! Cart request payloads

use serde::{Deserialize, Serialize};

/// Add one unit of an item to the open order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCartRequest {
    pub slug: String,
}

impl AddToCartRequest {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }
}
