//! Shop Client - headless storefront client
//!
//! Talks to the store backend over HTTP and keeps the browsing state
//! (page, filter, sort) consistent while responses arrive out of order.

pub mod api;
pub mod browse;
pub mod cart;
pub mod config;
pub mod detail;
pub mod display;
pub mod error;
pub mod http;
pub mod logger;

pub use api::StoreApi;
pub use browse::{BrowseController, BrowseSnapshot, BrowseStatus, ErrorInfo, FetchOutcome};
pub use cart::{CartEvent, CartService};
pub use config::{ClientConfig, StaticToken, TokenProvider};
pub use detail::{ProductDetail, ProductDetailLoader};
pub use display::ProductCard;
pub use error::{BrowseError, ClientError, ClientResult};
pub use http::NetworkHttpClient;

// Re-export shared types for convenience
pub use shared::{Comment, GenreChoice, ListQuery, Page, Pagination, Product, Rating};
