//! Category types for product organization.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::serde_util::null_as_default;

/// A product category as returned by the catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Category description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Products in this category, in backend order. Missing or `null` is empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
}

impl Category {
    /// Create an empty category.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            products: Vec::new(),
        }
    }

    /// Add products to this category.
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    /// Check if the category holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Consume the category and return its products, stamping the category
    /// name onto any product the backend sent without one.
    pub fn into_products(self) -> Vec<Product> {
        let name = self.name;
        self.products
            .into_iter()
            .map(|mut product| {
                if product.category_name.is_empty() {
                    product.category_name = name.clone();
                }
                product
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_products_decode_empty() {
        let absent: Category = serde_json::from_str(r#"{"id": 1, "name": "Empty"}"#).unwrap();
        assert!(absent.is_empty());

        let null: Category =
            serde_json::from_str(r#"{"id": 2, "name": "Null", "products": null}"#).unwrap();
        assert!(null.is_empty());
    }

    #[test]
    fn test_into_products_stamps_category_name() {
        let mut tagged = Product::new(2, "Tagged");
        tagged.category_name = "Backend".to_string();

        let category = Category::new(1, "RPG").with_products(vec![Product::new(1, "Bare"), tagged]);
        let products = category.into_products();

        assert_eq!(products[0].category_name, "RPG");
        assert_eq!(products[1].category_name, "Backend");
    }
}
