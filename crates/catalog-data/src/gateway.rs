//! Catalog gateway trait and its HTTP implementation.

use async_trait::async_trait;
use catalog_model::{
    CatalogError, CatalogResult, Category, Product, ProductDraft, ProductId, ProductPatch,
};
use tracing::debug;

use crate::{FetchClient, GatewayConfig};

/// Path of the backend's product collection.
pub const PRODUCT_COLLECTION: &str = "/product";

/// Transport operations against the product collection.
///
/// Implementations are stateless per call: no caching, no retries, and errors
/// are returned exactly as the transport produced them.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Fetch every category with its products.
    async fn fetch_categories(&self) -> CatalogResult<Vec<Category>>;

    /// Fetch one product.
    async fn fetch_product(&self, id: ProductId) -> CatalogResult<Product>;

    /// Create a product from a draft.
    async fn create_product(&self, draft: &ProductDraft) -> CatalogResult<Product>;

    /// Replace a product wholesale.
    async fn replace_product(&self, product: &Product) -> CatalogResult<Product>;

    /// Apply a partial update.
    async fn patch_product(&self, id: ProductId, updates: &ProductPatch) -> CatalogResult<Product>;

    /// Delete a product.
    async fn delete_product(&self, id: ProductId) -> CatalogResult<()>;
}

/// [`CatalogGateway`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalogGateway {
    client: FetchClient,
}

impl HttpCatalogGateway {
    /// Build a gateway from configuration.
    pub fn new(config: &GatewayConfig) -> CatalogResult<Self> {
        Ok(Self::with_client(FetchClient::new(config)?))
    }

    /// Build a gateway around an existing client.
    pub fn with_client(client: FetchClient) -> Self {
        Self { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &FetchClient {
        &self.client
    }

    fn product_path(id: ProductId) -> String {
        format!("{}/{}", PRODUCT_COLLECTION, id)
    }
}

/// Rewrite a URL-based miss into one that names the product.
fn name_missing(id: ProductId) -> impl FnOnce(CatalogError) -> CatalogError {
    move |err| match err {
        CatalogError::NotFound(_) => CatalogError::NotFound(format!("product {}", id)),
        other => other,
    }
}

#[async_trait]
impl CatalogGateway for HttpCatalogGateway {
    async fn fetch_categories(&self) -> CatalogResult<Vec<Category>> {
        let categories: Vec<Category> = self
            .client
            .get(PRODUCT_COLLECTION)
            .send()
            .await?
            .error_for_status()?
            .json()?;
        debug!(categories = categories.len(), "fetched catalog");
        Ok(categories)
    }

    async fn fetch_product(&self, id: ProductId) -> CatalogResult<Product> {
        self.client
            .get(&Self::product_path(id))
            .send()
            .await?
            .error_for_status()
            .map_err(name_missing(id))?
            .json()
    }

    async fn create_product(&self, draft: &ProductDraft) -> CatalogResult<Product> {
        self.client
            .post(PRODUCT_COLLECTION)
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .json()
    }

    async fn replace_product(&self, product: &Product) -> CatalogResult<Product> {
        let id = product.id;
        self.client
            .put(PRODUCT_COLLECTION)
            .json(product)
            .send()
            .await?
            .error_for_status()
            .map_err(name_missing(id))?
            .json()
    }

    async fn patch_product(&self, id: ProductId, updates: &ProductPatch) -> CatalogResult<Product> {
        self.client
            .patch(&Self::product_path(id))
            .json(updates)
            .send()
            .await?
            .error_for_status()
            .map_err(name_missing(id))?
            .json()
    }

    async fn delete_product(&self, id: ProductId) -> CatalogResult<()> {
        self.client
            .delete(&Self::product_path(id))
            .send()
            .await?
            .error_for_status()
            .map_err(name_missing(id))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_path() {
        assert_eq!(HttpCatalogGateway::product_path(ProductId::new(7)), "/product/7");
    }

    #[test]
    fn test_name_missing_only_rewrites_not_found() {
        let id = ProductId::new(3);
        let renamed = name_missing(id)(CatalogError::NotFound("http://h/product/3".into()));
        assert_eq!(renamed, CatalogError::NotFound("product 3".into()));

        let kept = name_missing(id)(CatalogError::Transport("reset".into()));
        assert_eq!(kept, CatalogError::Transport("reset".into()));
    }
}
