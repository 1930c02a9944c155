//! Request payloads for the product write endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::{MediaKind, Product};

/// A product to be created. The backend assigns the id.
///
/// Unset fields are left out of the request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_file: Option<String>,
}

impl ProductDraft {
    /// Start a draft with a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category_name: impl Into<String>) -> Self {
        self.category_name = Some(category_name.into());
        self
    }

    pub fn with_media_type(mut self, media_type: MediaKind) -> Self {
        self.media_type = Some(media_type);
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_stock_quantity(mut self, quantity: u32) -> Self {
        self.stock_quantity = Some(quantity);
        self
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: Some(product.name.clone()),
            description: Some(product.description.clone()),
            category_name: Some(product.category_name.clone()),
            media_type: Some(product.media_type.clone()),
            format: Some(product.format.clone()),
            price: Some(product.price),
            stock_quantity: Some(product.stock_quantity),
            release_date: product.release_date.clone(),
            publisher: Some(product.publisher.clone()),
            rating_age: Some(product.rating_age.clone()),
            image_file: product.image_file.clone(),
        }
    }
}

/// A partial update: wire field name to new value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ProductPatch(Map<String, Value>);

impl ProductPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary field by its wire name.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.set("name", name.into())
    }

    pub fn description(self, description: impl Into<String>) -> Self {
        self.set("description", description.into())
    }

    pub fn price(self, price: f64) -> Self {
        self.set("price", price)
    }

    pub fn stock_quantity(self, quantity: u32) -> Self {
        self.set("stockQuantity", quantity)
    }

    pub fn image_file(self, image_file: impl Into<String>) -> Self {
        self.set("imageFile", image_file.into())
    }

    /// Get a field's pending value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Check if the patch updates nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields updated.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
