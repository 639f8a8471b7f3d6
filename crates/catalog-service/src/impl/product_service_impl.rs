//! Product service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface, DEFAULT_TTL};
use crate::dto::ProductResponse;
use crate::product_service::ProductService;
use catalog_core::{CatalogError, CatalogResult, ProductId};
use catalog_repository::ProductRepository;
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Read-through product service component for Shaku DI.
///
/// Cache failures never fail a request: read errors and undecodable
/// entries fall through to the store, and write errors are logged.
#[derive(Component)]
#[shaku(interface = ProductService)]
pub struct ProductServiceComponent {
    #[shaku(inject)]
    product_repository: Arc<dyn ProductRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    /// Expiration applied to every cached product.
    #[shaku(default = DEFAULT_TTL)]
    cache_ttl: Duration,
    /// Namespace for cache keys.
    #[shaku(default = cache_keys::DEFAULT_PREFIX.to_string())]
    key_prefix: String,
}

impl ProductServiceComponent {
    /// Creates a product service with the default TTL and key prefix.
    #[must_use]
    pub fn new(
        product_repository: Arc<dyn ProductRepository>,
        cache: Arc<dyn CacheInterface>,
    ) -> Self {
        Self {
            product_repository,
            cache,
            cache_ttl: DEFAULT_TTL,
            key_prefix: cache_keys::DEFAULT_PREFIX.to_string(),
        }
    }

    /// Sets the cache TTL.
    #[must_use]
    pub fn with_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }

    /// Sets the cache key prefix.
    #[must_use]
    pub fn with_key_prefix(mut self, key_prefix: impl Into<String>) -> Self {
        self.key_prefix = key_prefix.into();
        self
    }

    async fn cached(&self, key: &str) -> Option<ProductResponse> {
        match self.cache.get::<ProductResponse>(key).await {
            Ok(hit) => hit,
            Err(e) => {
                warn!(key = %key, error = %e, "Cache read failed, falling back to store");
                None
            }
        }
    }
}

#[async_trait]
impl ProductService for ProductServiceComponent {
    async fn get_product(&self, id: ProductId) -> CatalogResult<ProductResponse> {
        debug!("Getting product: {}", id);

        let cache_key = cache_keys::product_by_id(&self.key_prefix, id);

        if let Some(cached) = self.cached(&cache_key).await {
            debug!("Cache hit for product: {}", id);
            return Ok(cached);
        }

        // Store errors propagate as-is and nothing is cached for them.
        let product = self
            .product_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Product", id))?;

        let response = ProductResponse::from(product);

        if let Err(e) = self.cache.set(&cache_key, &response, self.cache_ttl).await {
            warn!(key = %cache_key, error = %e, "Error caching product");
        }

        Ok(response)
    }
}

impl std::fmt::Debug for ProductServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductServiceComponent")
            .field("cache_ttl", &self.cache_ttl)
            .field("key_prefix", &self.key_prefix)
            .finish_non_exhaustive()
    }
}
