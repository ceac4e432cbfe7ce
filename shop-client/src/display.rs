//! Product card projection
//!
//! Formatting done once where data leaves the model, so render code only
//! prints strings.

use rust_decimal::{Decimal, RoundingStrategy};
use shared::Product;

/// Everything a product card shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub genre: String,
    pub author: Option<String>,
    pub image: String,
    pub is_fiction: bool,
    /// e.g. "$ 12.99"
    pub price_label: String,
    /// Two-decimal average rating; `None` hides the rating badge
    pub rating_label: Option<String>,
    /// e.g. "Tue, 21 Sep 1937 00:00:00 GMT"
    pub release_label: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            slug: product.slug.clone(),
            title: product.title.clone(),
            genre: product.genre.clone(),
            author: product.author_name.clone(),
            image: product.image.clone(),
            is_fiction: product.is_fiction(),
            price_label: format_price(product.price),
            rating_label: format_rating(product.avg_rating),
            release_label: product
                .release_date
                .format("%a, %d %b %Y %H:%M:%S GMT")
                .to_string(),
        }
    }
}

/// Price with two decimals, halves rounded away from zero
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("$ {rounded:.2}")
}

/// Rating with two decimals. Missing, non-finite and zero ratings are not shown.
pub fn format_rating(rating: Option<f64>) -> Option<String> {
    rating
        .filter(|r| r.is_finite() && *r != 0.0)
        .map(|r| format!("{r:.2}"))
}
