//! Derived views over a product collection.
//!
//! Every function borrows the collection and returns a fresh `Vec`, so the
//! input order is never disturbed.

use std::cmp::Reverse;

use catalog_model::{Product, ProductId};

use crate::CatalogFilter;

/// Products passing every filter, in collection order.
pub fn apply(products: &[Product], filters: &[CatalogFilter]) -> Vec<Product> {
    products
        .iter()
        .filter(|product| filters.iter().all(|filter| filter.matches(product)))
        .cloned()
        .collect()
}

/// Case-insensitive substring search over name, description and category name.
pub fn search(products: &[Product], query: &str) -> Vec<Product> {
    apply(products, &[CatalogFilter::text(query)])
}

/// Products priced within `min..=max`; empty when `min > max`.
pub fn price_range(products: &[Product], min: f64, max: f64) -> Vec<Product> {
    apply(products, &[CatalogFilter::price_range(min, max)])
}

pub fn by_format(products: &[Product], format: &str) -> Vec<Product> {
    apply(products, &[CatalogFilter::format(format)])
}

pub fn by_media_type(products: &[Product], kind: &str) -> Vec<Product> {
    apply(products, &[CatalogFilter::media_type(kind)])
}

pub fn by_category(products: &[Product], name: &str) -> Vec<Product> {
    apply(products, &[CatalogFilter::category(name)])
}

/// Highest stock first, truncated to `limit`. Stock stands in for popularity.
pub fn featured(products: &[Product], limit: usize) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by_key(|product| Reverse(product.stock_quantity));
    sorted.truncate(limit);
    sorted
}

/// Most recent release first, truncated to `limit`. Missing or unparsable
/// dates sort last.
pub fn new_releases(products: &[Product], limit: usize) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by_cached_key(|product| Reverse(product.released_at()));
    sorted.truncate(limit);
    sorted
}

/// Other products in the same category, in collection order.
pub fn related(products: &[Product], category: &str, exclude: ProductId, limit: usize) -> Vec<Product> {
    let filter = CatalogFilter::category(category);
    products
        .iter()
        .filter(|product| product.id != exclude && filter.matches(product))
        .take(limit)
        .cloned()
        .collect()
}
