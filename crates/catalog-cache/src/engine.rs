//! The catalog engine: single-flight cache over the flattened catalog.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use catalog_data::CatalogGateway;
use catalog_model::{
    CatalogResult, Category, Product, ProductDraft, ProductId, ProductPatch,
};
use futures::future::{BoxFuture, FutureExt, Shared};
use tracing::{debug, info, warn};

use crate::stats::StatsRecorder;
use crate::{query, CacheStats, CacheStatus, CatalogFilter, ImageResolver};

pub const DEFAULT_FEATURED_LIMIT: usize = 6;
pub const DEFAULT_NEW_RELEASES_LIMIT: usize = 6;
pub const DEFAULT_RELATED_LIMIT: usize = 4;

type Snapshot = Arc<[Product]>;
type InFlight = Shared<BoxFuture<'static, CatalogResult<Snapshot>>>;

/// Cache lifecycle. `Ready` with zero products is a valid populated state and
/// is never confused with `Cold`.
enum CacheState {
    Cold,
    Loading(InFlight),
    Ready(Snapshot),
}

struct Slot {
    state: CacheState,
    /// Bumped on every fetch start and every invalidation. A fetch may only
    /// settle the slot if the generation it started under is still current.
    generation: u64,
}

/// Concatenate every category's products in backend order, stamping each
/// product with its category's name where the backend left it blank.
pub fn flatten(categories: Vec<Category>) -> Vec<Product> {
    categories
        .into_iter()
        .flat_map(Category::into_products)
        .collect()
}

/// Owns the cached product collection and answers every derived query.
pub struct CatalogEngine {
    gateway: Arc<dyn CatalogGateway>,
    slot: Mutex<Slot>,
    images: ImageResolver,
    stats: StatsRecorder,
}

impl CatalogEngine {
    /// Create an engine with a cold cache.
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Self {
        Self {
            gateway,
            slot: Mutex::new(Slot {
                state: CacheState::Cold,
                generation: 0,
            }),
            images: ImageResolver::default(),
            stats: StatsRecorder::default(),
        }
    }

    /// Set the image resolver.
    pub fn with_images(mut self, images: ImageResolver) -> Self {
        self.images = images;
        self
    }

    /// The gateway this engine fetches through.
    pub fn gateway(&self) -> &Arc<dyn CatalogGateway> {
        &self.gateway
    }

    /// Cache counters so far.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }

    /// Check if the collection is currently cached.
    pub fn is_populated(&self) -> bool {
        matches!(self.lock().state, CacheState::Ready(_))
    }

    /// Drop the cached collection. The next read fetches again.
    pub fn invalidate(&self) {
        let mut slot = self.lock();
        slot.generation += 1;
        slot.state = CacheState::Cold;
        self.stats.invalidation();
        debug!(generation = slot.generation, "catalog cache invalidated");
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Ensure the collection is populated and return a shared view of it.
    async fn snapshot(&self) -> CatalogResult<Snapshot> {
        let (generation, fetch) = {
            let mut guard = self.lock();
            let slot = &mut *guard;
            match &slot.state {
                CacheState::Ready(products) => {
                    self.stats.record(CacheStatus::Hit);
                    debug!(status = %CacheStatus::Hit, products = products.len(), "serving catalog from cache");
                    return Ok(Arc::clone(products));
                }
                CacheState::Loading(fetch) => {
                    self.stats.record(CacheStatus::Join);
                    debug!(status = %CacheStatus::Join, generation = slot.generation, "joining in-flight catalog fetch");
                    (slot.generation, fetch.clone())
                }
                CacheState::Cold => {
                    self.stats.record(CacheStatus::Miss);
                    slot.generation += 1;
                    let fetch = self.start_fetch();
                    slot.state = CacheState::Loading(fetch.clone());
                    debug!(status = %CacheStatus::Miss, generation = slot.generation, "catalog cache cold, fetching");
                    (slot.generation, fetch)
                }
            }
        };

        let result = fetch.await;
        self.settle(generation, &result);
        result
    }

    fn start_fetch(&self) -> InFlight {
        let gateway = Arc::clone(&self.gateway);
        let fetch: BoxFuture<'static, CatalogResult<Snapshot>> = async move {
            let categories = gateway.fetch_categories().await?;
            Ok(Snapshot::from(flatten(categories)))
        }
        .boxed();
        fetch.shared()
    }

    /// Record a finished fetch, unless the slot has moved on since it started.
    fn settle(&self, generation: u64, result: &CatalogResult<Snapshot>) {
        let mut slot = self.lock();
        if slot.generation != generation || !matches!(slot.state, CacheState::Loading(_)) {
            return;
        }

        match result {
            Ok(products) => {
                info!(products = products.len(), generation, "catalog cache populated");
                slot.state = CacheState::Ready(Arc::clone(products));
            }
            Err(err) => {
                warn!(error = %err, kind = %err.kind(), generation, "catalog fetch failed, cache left cold");
                self.stats.failure();
                slot.state = CacheState::Cold;
            }
        }
    }

    // ========== Reads ==========

    /// The whole flattened collection, in catalog order.
    pub async fn products(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.snapshot().await?.to_vec())
    }

    /// Products passing every filter.
    pub async fn filter(&self, filters: &[CatalogFilter]) -> CatalogResult<Vec<Product>> {
        Ok(query::apply(&self.snapshot().await?, filters))
    }

    /// Case-insensitive substring search over name, description and category.
    pub async fn search(&self, query: &str) -> CatalogResult<Vec<Product>> {
        Ok(query::search(&self.snapshot().await?, query))
    }

    /// Products priced within `min..=max`. Empty when `min > max`.
    pub async fn filter_by_price_range(&self, min: f64, max: f64) -> CatalogResult<Vec<Product>> {
        Ok(query::price_range(&self.snapshot().await?, min, max))
    }

    pub async fn filter_by_format(&self, format: &str) -> CatalogResult<Vec<Product>> {
        Ok(query::by_format(&self.snapshot().await?, format))
    }

    pub async fn filter_by_media_type(&self, kind: &str) -> CatalogResult<Vec<Product>> {
        Ok(query::by_media_type(&self.snapshot().await?, kind))
    }

    pub async fn by_category(&self, name: &str) -> CatalogResult<Vec<Product>> {
        Ok(query::by_category(&self.snapshot().await?, name))
    }

    /// Highest-stock products first.
    pub async fn featured(&self, limit: usize) -> CatalogResult<Vec<Product>> {
        Ok(query::featured(&self.snapshot().await?, limit))
    }

    /// Most recently released products first.
    pub async fn new_releases(&self, limit: usize) -> CatalogResult<Vec<Product>> {
        Ok(query::new_releases(&self.snapshot().await?, limit))
    }

    /// Other products from the same category, in catalog order.
    pub async fn related_to(
        &self,
        category: &str,
        exclude: ProductId,
        limit: usize,
    ) -> CatalogResult<Vec<Product>> {
        Ok(query::related(&self.snapshot().await?, category, exclude, limit))
    }

    /// Image URL for a product, or a placeholder.
    pub fn image_url(&self, product: Option<&Product>) -> String {
        self.images.resolve(product)
    }

    // ========== Pass-through ==========

    /// The hierarchical catalog, straight from the gateway.
    pub async fn categories(&self) -> CatalogResult<Vec<Category>> {
        self.gateway.fetch_categories().await
    }

    /// One product, straight from the gateway.
    pub async fn product(&self, id: ProductId) -> CatalogResult<Product> {
        self.gateway.fetch_product(id).await
    }

    // ========== Writes (invalidate on success) ==========

    pub async fn create_product(&self, draft: &ProductDraft) -> CatalogResult<Product> {
        let created = self.gateway.create_product(draft).await?;
        info!(product_id = %created.id, "product created");
        self.invalidate();
        Ok(created)
    }

    pub async fn replace_product(&self, product: &Product) -> CatalogResult<Product> {
        let replaced = self.gateway.replace_product(product).await?;
        info!(product_id = %replaced.id, "product replaced");
        self.invalidate();
        Ok(replaced)
    }

    pub async fn patch_product(&self, id: ProductId, updates: &ProductPatch) -> CatalogResult<Product> {
        let patched = self.gateway.patch_product(id, updates).await?;
        info!(product_id = %id, fields = updates.len(), "product patched");
        self.invalidate();
        Ok(patched)
    }

    pub async fn delete_product(&self, id: ProductId) -> CatalogResult<()> {
        self.gateway.delete_product(id).await?;
        info!(product_id = %id, "product deleted");
        self.invalidate();
        Ok(())
    }

    /// Set a product's stock level, e.g. after a purchase.
    pub async fn update_stock_quantity(&self, id: ProductId, quantity: u32) -> CatalogResult<Product> {
        self.patch_product(id, &ProductPatch::new().stock_quantity(quantity)).await
    }
}

impl std::fmt::Debug for CatalogEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogEngine")
            .field("populated", &self.is_populated())
            .field("images", &self.images)
            .field("stats", &self.stats())
            .finish()
    }
}
