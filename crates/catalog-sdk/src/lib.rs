//! Public SDK for the product catalog.
//!
//! This crate re-exports the model, gateway and engine crates and adds the
//! pieces an application needs around them: a configuration file, a tracing
//! subscriber and [`connect`], which wires an HTTP gateway into a
//! [`CatalogEngine`].
//!
//! ```ignore
//! use catalog_sdk::prelude::*;
//!
//! let config = CatalogConfig::load("catalog.toml")?.apply_env_overrides();
//! init_logging(&config.logging)?;
//!
//! let engine = catalog_sdk::connect(&config)?;
//! for product in engine.featured(DEFAULT_FEATURED_LIMIT).await? {
//!     println!("{} {} {}", product.name, product.format_price(), engine.image_url(Some(&product)));
//! }
//! ```

pub mod config;
pub mod logging;

use std::sync::Arc;

pub use catalog_cache;
pub use catalog_data;
pub use catalog_model;

pub use config::{AssetConfig, CatalogConfig};
pub use logging::{init_logging, LogFormat, LoggingConfig, LoggingError};

use catalog_cache::CatalogEngine;
use catalog_data::HttpCatalogGateway;
use catalog_model::CatalogResult;

/// Build an engine backed by the HTTP gateway described in `config`.
///
/// The cache starts cold; nothing is fetched until the first read.
pub fn connect(config: &CatalogConfig) -> CatalogResult<CatalogEngine> {
    let gateway = HttpCatalogGateway::new(&config.api)?;
    tracing::info!(
        base_url = %config.api.base_url,
        asset_base = %config.assets.base_path,
        "catalog engine configured"
    );
    Ok(CatalogEngine::new(Arc::new(gateway)).with_images(config.assets.resolver()))
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use catalog_cache::{
        CacheStats, CatalogEngine, CatalogFilter, ImageResolver, DEFAULT_FEATURED_LIMIT,
        DEFAULT_NEW_RELEASES_LIMIT, DEFAULT_RELATED_LIMIT,
    };
    pub use catalog_data::prelude::*;
    pub use catalog_model::prelude::*;

    pub use crate::{connect, init_logging, CatalogConfig, LogFormat, LoggingConfig};
}
