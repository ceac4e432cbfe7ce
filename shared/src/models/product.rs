//! Product Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Book type label for fiction titles
pub const FICTION_LABEL: &str = "Fiction";

/// Product entity (a book in the catalogue)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub discount_price: Option<Decimal>,
    /// Genre display name (e.g. "Fantasy")
    pub genre: String,
    /// Book type display name: "Fiction" or "Non-Fiction"
    #[serde(default)]
    pub label: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub publisher_info: Option<String>,
    #[serde(default)]
    pub author_bio: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    /// Average customer rating, absent when nobody rated the item
    #[serde(default, deserialize_with = "deserialize_avg_rating")]
    pub avg_rating: Option<f64>,
    pub release_date: DateTime<Utc>,
}

impl Product {
    /// Whether the item carries the fiction badge
    pub fn is_fiction(&self) -> bool {
        self.label == FICTION_LABEL
    }
}

/// Shapes the backend uses for the average rating.
///
/// The list endpoints send the aggregate `{"rating__avg": 7.5}`; other
/// callers may send the bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAvgRating {
    Aggregate {
        #[serde(rename = "rating__avg", default)]
        rating_avg: Option<f64>,
    },
    Plain(f64),
}

fn deserialize_avg_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawAvgRating>::deserialize(deserializer)?;
    let value = match raw {
        Some(RawAvgRating::Aggregate { rating_avg }) => rating_avg,
        Some(RawAvgRating::Plain(value)) => Some(value),
        None => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}
