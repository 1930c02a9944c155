//! Catalog cache and query engine.
//!
//! This crate provides:
//! - `CatalogEngine` - owns the flattened product collection and serves every derived view
//! - `CatalogFilter` - composable product predicates
//! - `query` - the pure list transforms behind the engine's views
//! - `ImageResolver` - product image URL resolution
//! - `CacheStats` / `CacheStatus` - cache observability
//!
//! The collection is fetched through a [`CatalogGateway`] at most once per
//! cold period. Concurrent callers that arrive while a fetch is outstanding
//! share it instead of issuing their own.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use catalog_cache::CatalogEngine;
//! use catalog_data::{GatewayConfig, HttpCatalogGateway};
//!
//! let gateway = HttpCatalogGateway::new(&GatewayConfig::default())?;
//! let engine = CatalogEngine::new(Arc::new(gateway));
//!
//! let featured = engine.featured(6).await?;
//! let hits = engine.search("alpha").await?;
//!
//! // After a write made directly through the gateway:
//! engine.invalidate();
//! ```
//!
//! [`CatalogGateway`]: catalog_data::CatalogGateway

mod engine;
mod filter;
mod image;
pub mod query;
mod stats;

pub use engine::{
    flatten, CatalogEngine, DEFAULT_FEATURED_LIMIT, DEFAULT_NEW_RELEASES_LIMIT,
    DEFAULT_RELATED_LIMIT,
};
pub use filter::CatalogFilter;
pub use image::{
    placeholder, ImageResolver, DEFAULT_ASSET_BASE, GAME_PLACEHOLDER, MOVIE_PLACEHOLDER, TV_SERIES_PLACEHOLDER,
};
pub use stats::{CacheStats, CacheStatus};
