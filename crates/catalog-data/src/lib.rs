//! Remote catalog gateway.
//!
//! Translates catalog operations into requests against the backend's product
//! collection endpoint and decodes the answers into [`catalog_model`] values.
//! There is no caching and no retry here: every call is one request, and
//! transport, status and decode failures are surfaced as [`CatalogError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_data::{CatalogGateway, GatewayConfig, HttpCatalogGateway};
//!
//! let gateway = HttpCatalogGateway::new(&GatewayConfig::new("http://localhost:8080"))?;
//!
//! // GET /product
//! let categories = gateway.fetch_categories().await?;
//!
//! // PATCH /product/7
//! let updated = gateway
//!     .patch_product(ProductId::new(7), &ProductPatch::new().stock_quantity(50))
//!     .await?;
//! ```
//!
//! [`CatalogError`]: catalog_model::CatalogError

mod client;
mod config;
mod gateway;

pub use client::{ClientRequestBuilder, FetchClient, Response};
pub use config::{GatewayConfig, ENV_BASE_URL};
pub use gateway::{CatalogGateway, HttpCatalogGateway, PRODUCT_COLLECTION};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CatalogGateway, GatewayConfig, HttpCatalogGateway};
}
