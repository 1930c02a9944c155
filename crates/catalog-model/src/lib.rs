//! Catalog domain types for the storefront catalog layer.
//!
//! This crate has no I/O. It defines:
//!
//! - **Catalog**: [`Category`], [`Product`] and [`MediaKind`] as served by the backend
//! - **Payloads**: [`ProductDraft`] for creation and [`ProductPatch`] for partial updates
//! - **Errors**: the [`CatalogError`] taxonomy shared by the gateway and the engine
//!
//! # Example
//!
//! ```rust
//! use catalog_model::prelude::*;
//!
//! let json = r#"[{"id": 1, "name": "RPG", "description": "", "products": [
//!     {"id": 7, "name": "Alpha Quest", "mediaType": "Game", "price": 59.99, "stockQuantity": 3}
//! ]}]"#;
//!
//! let categories: Vec<Category> = serde_json::from_str(json).unwrap();
//! let product = &categories[0].products[0];
//! assert_eq!(product.id, ProductId::new(7));
//! assert_eq!(product.media_type, MediaKind::Game);
//! assert!(product.is_low_stock(LOW_STOCK_THRESHOLD));
//! ```

pub mod catalog;
pub mod error;
pub mod ids;
pub mod payload;

mod serde_util;

pub use catalog::{Category, MediaKind, Product, LOW_STOCK_THRESHOLD};
pub use error::{CatalogError, CatalogResult, ErrorKind};
pub use ids::{CategoryId, ProductId};
pub use payload::{ProductDraft, ProductPatch};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{Category, MediaKind, Product, LOW_STOCK_THRESHOLD};
    pub use crate::error::{CatalogError, CatalogResult, ErrorKind};
    pub use crate::ids::{CategoryId, ProductId};
    pub use crate::payload::{ProductDraft, ProductPatch};
}
