//! Product filters.

use catalog_model::Product;
use serde::{Deserialize, Serialize};

/// A predicate over catalog products.
///
/// All string comparisons ignore case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CatalogFilter {
    /// Substring of name, description, or category name.
    Text(String),
    /// Price within `min..=max`. Matches nothing when `min > max`.
    PriceRange { min: f64, max: f64 },
    /// Exact format (e.g., "PS5").
    Format(String),
    /// Exact media kind wire value (e.g., "TV_Series").
    MediaType(String),
    /// Exact category name.
    Category(String),
    /// Stock quantity above zero.
    InStock,
}

impl CatalogFilter {
    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        CatalogFilter::Text(query.into())
    }

    /// Create a price range filter.
    pub fn price_range(min: f64, max: f64) -> Self {
        CatalogFilter::PriceRange { min, max }
    }

    /// Create a format filter.
    pub fn format(format: impl Into<String>) -> Self {
        CatalogFilter::Format(format.into())
    }

    /// Create a media kind filter.
    pub fn media_type(kind: impl Into<String>) -> Self {
        CatalogFilter::MediaType(kind.into())
    }

    /// Create a category filter.
    pub fn category(name: impl Into<String>) -> Self {
        CatalogFilter::Category(name.into())
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CatalogFilter::Text(query) => {
                let needle = query.to_lowercase();
                contains_folded(&product.name, &needle)
                    || contains_folded(&product.description, &needle)
                    || contains_folded(&product.category_name, &needle)
            }
            CatalogFilter::PriceRange { min, max } => {
                min <= max && *min <= product.price && product.price <= *max
            }
            CatalogFilter::Format(format) => eq_folded(&product.format, format),
            CatalogFilter::MediaType(kind) => product.media_type.matches(kind),
            CatalogFilter::Category(name) => eq_folded(&product.category_name, name),
            CatalogFilter::InStock => product.is_in_stock(),
        }
    }
}

/// `needle` must already be lowercase.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn eq_folded(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::MediaKind;

    fn product() -> Product {
        let mut product = Product::new(1, "Alpha Quest");
        product.description = "Sword and sorcery".to_string();
        product.category_name = "RPG".to_string();
        product.format = "PS5".to_string();
        product.media_type = MediaKind::Game;
        product.price = 20.0;
        product.stock_quantity = 1;
        product
    }

    #[test]
    fn test_text_matches_any_field() {
        let product = product();
        assert!(CatalogFilter::text("QUEST").matches(&product));
        assert!(CatalogFilter::text("sorcery").matches(&product));
        assert!(CatalogFilter::text("rp").matches(&product));
        assert!(!CatalogFilter::text("racing").matches(&product));
    }

    #[test]
    fn test_price_range_inclusive() {
        let product = product();
        assert!(CatalogFilter::price_range(10.0, 20.0).matches(&product));
        assert!(CatalogFilter::price_range(20.0, 30.0).matches(&product));
        assert!(!CatalogFilter::price_range(20.01, 30.0).matches(&product));
        assert!(!CatalogFilter::price_range(30.0, 10.0).matches(&product));
    }

    #[test]
    fn test_exact_matches_ignore_case() {
        let product = product();
        assert!(CatalogFilter::format("ps5").matches(&product));
        assert!(!CatalogFilter::format("PS").matches(&product));
        assert!(CatalogFilter::media_type("GAME").matches(&product));
        assert!(CatalogFilter::category("rpg").matches(&product));
        assert!(CatalogFilter::InStock.matches(&product));
    }
}
