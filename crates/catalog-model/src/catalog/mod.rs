//! Product catalog module.
//!
//! Contains the records served by the backend's product collection endpoint.

mod category;
mod media;
mod product;

pub use category::Category;
pub use media::MediaKind;
pub use product::{Product, LOW_STOCK_THRESHOLD};
