//! Store backend API
//!
//! `StoreApi` is the transport contract the controllers depend on;
//! `NetworkHttpClient` implements it over HTTP.

use async_trait::async_trait;
use serde::Deserialize;
use shared::{AddToCartRequest, Comment, GenreChoice, ListQuery, Page, Product, Rating};

use crate::{ClientResult, NetworkHttpClient};

/// Endpoint path segments, relative to the API root
pub mod endpoints {
    pub const PRODUCTS: &str = "products";
    pub const BROWSE: &str = "browse";
    pub const GENRE_CHOICES: &str = "genre-choices";
    pub const ADD_TO_CART: &str = "add-to-cart";
    pub const COMMENTS: &str = "comments";
    pub const RATINGS: &str = "ratings";
    pub const AUTHOR_LIST: &str = "author-list";
}

/// Store backend operations
#[async_trait]
pub trait StoreApi: Send + Sync {
    /// One page of products, optionally filtered and sorted
    async fn list_products(&self, query: &ListQuery) -> ClientResult<Page<Product>>;

    /// All genre choices as `{code, label}` pairs
    async fn genre_choices(&self) -> ClientResult<Vec<GenreChoice>>;

    /// Add one unit of the item to the caller's open order
    async fn add_to_cart(&self, slug: &str) -> ClientResult<()>;

    /// A single product
    async fn product(&self, id: i64) -> ClientResult<Product>;

    /// Comments left on a book
    async fn comments(&self, book_title: &str) -> ClientResult<Page<Comment>>;

    /// Ratings given to a book
    async fn ratings(&self, book_title: &str) -> ClientResult<Page<Rating>>;

    /// Every product by one author
    async fn author_products(&self, author_name: &str) -> ClientResult<Vec<Product>>;
}

/// List endpoints answer either paginated or as a bare array, depending on
/// the backend's pagination settings
#[derive(Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    Paged(Page<T>),
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Paged(page) => page.results,
            Listing::Plain(items) => items,
        }
    }
}

#[async_trait]
impl StoreApi for NetworkHttpClient {
    async fn list_products(&self, query: &ListQuery) -> ClientResult<Page<Product>> {
        if query.is_browse() {
            self.get(&[endpoints::BROWSE], &query.browse_params()).await
        } else {
            self.get(&[endpoints::PRODUCTS], &[("page", query.page.to_string())])
                .await
        }
    }

    async fn genre_choices(&self) -> ClientResult<Vec<GenreChoice>> {
        let pairs: Vec<(String, String)> = self.get(&[endpoints::GENRE_CHOICES], &[]).await?;
        Ok(GenreChoice::from_pairs(pairs))
    }

    async fn add_to_cart(&self, slug: &str) -> ClientResult<()> {
        self.post_no_content(&[endpoints::ADD_TO_CART], &AddToCartRequest::new(slug))
            .await
    }

    async fn product(&self, id: i64) -> ClientResult<Product> {
        let id = id.to_string();
        self.get(&[endpoints::PRODUCTS, &id], &[]).await
    }

    async fn comments(&self, book_title: &str) -> ClientResult<Page<Comment>> {
        self.get(&[endpoints::COMMENTS], &[("book_title", book_title.to_string())])
            .await
    }

    async fn ratings(&self, book_title: &str) -> ClientResult<Page<Rating>> {
        self.get(&[endpoints::RATINGS], &[("book_title", book_title.to_string())])
            .await
    }

    async fn author_products(&self, author_name: &str) -> ClientResult<Vec<Product>> {
        let listing: Listing<Product> = self
            .get(
                &[endpoints::AUTHOR_LIST, author_name],
                &[("author_name", author_name.to_string())],
            )
            .await?;
        Ok(listing.into_vec())
    }
}
