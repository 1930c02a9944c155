//! Product records.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::catalog::MediaKind;
use crate::ids::ProductId;
use crate::serde_util::null_as_default;

/// Stock level at or below which a product counts as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// A product in the catalog.
///
/// `category_name` is a denormalized copy of the owning category's name taken
/// when the catalog is flattened. Renaming the category later does not update
/// products that were already fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Name of the owning category.
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media_type: MediaKind,
    /// Platform or SKU variant (e.g., "PS5", "Blu-ray").
    #[serde(default, deserialize_with = "null_as_default")]
    pub format: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock_quantity: u32,
    /// Release date as sent by the backend. See [`Product::released_at`].
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub publisher: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating_age: String,
    /// Absolute image URL or a bare asset filename.
    #[serde(default)]
    pub image_file: Option<String>,
}

impl Product {
    /// Create a product with only an id and a name set.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category_name: String::new(),
            media_type: MediaKind::default(),
            format: String::new(),
            price: 0.0,
            stock_quantity: 0,
            release_date: None,
            publisher: String::new(),
            rating_age: String::new(),
            image_file: None,
        }
    }

    /// Check if the product can be bought right now.
    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    /// Check if the product is in stock but at or below `threshold`.
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock_quantity > 0 && self.stock_quantity <= threshold
    }

    /// Format the price for display.
    pub fn format_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Parse the release date.
    ///
    /// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and naive
    /// `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps. Anything else yields `None`.
    pub fn released_at(&self) -> Option<NaiveDateTime> {
        let raw = self.release_date.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.naive_utc());
        }
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(ts);
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    }
}
