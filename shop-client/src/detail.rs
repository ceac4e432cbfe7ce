//! Product detail loading

use std::sync::Arc;

use shared::{Comment, Product, Rating};

use crate::{ClientResult, StoreApi};

/// A product together with the comments left on it
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    pub comments: Vec<Comment>,
}

/// Loads the detail view of one product
pub struct ProductDetailLoader<A: StoreApi> {
    api: Arc<A>,
}

impl<A: StoreApi> ProductDetailLoader<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Fetch the product, then its comments by title.
    ///
    /// A failed comment request still yields the product, with no comments.
    pub async fn load(&self, id: i64) -> ClientResult<ProductDetail> {
        let product = self.api.product(id).await?;

        let comments = match self.api.comments(&product.title).await {
            Ok(page) => page.results,
            Err(e) => {
                tracing::warn!(id, title = %product.title, error = %e, "Failed to load comments");
                Vec::new()
            }
        };

        Ok(ProductDetail { product, comments })
    }

    /// Ratings given to the product
    pub async fn ratings(&self, detail: &ProductDetail) -> ClientResult<Vec<Rating>> {
        Ok(self.api.ratings(&detail.product.title).await?.results)
    }

    /// Other products by the same author; empty when the author is unknown
    pub async fn more_by_author(&self, detail: &ProductDetail) -> ClientResult<Vec<Product>> {
        let Some(author) = detail.product.author_name.as_deref() else {
            return Ok(Vec::new());
        };
        let products = self.api.author_products(author).await?;
        Ok(products
            .into_iter()
            .filter(|p| p.id != detail.product.id)
            .collect())
    }
}
