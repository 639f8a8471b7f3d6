//! Dependency injection module using Shaku.
//!
//! `CatalogModule` wires the product store, the cache backend selected by
//! configuration, and the read-through product service.

use catalog_config::{AppConfig, CacheBackend};
use catalog_core::{module, CatalogResult};
use catalog_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, PostgresProductRepository,
};
use catalog_service::{
    create_redis_pool, CacheInterface, InMemoryCache, ProductServiceComponent,
    ProductServiceComponentParameters, RedisCacheService, RedisCacheServiceParameters,
};
use std::sync::Arc;
use tracing::info;

module! {
    pub CatalogModule {
        components = [
            DatabasePool,
            PostgresProductRepository,
            RedisCacheService,
            ProductServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the catalog module around an established database pool.
///
/// Redis pool creation does not connect, so an unreachable cache only
/// shows up later as degraded readiness.
pub fn build_catalog_module(
    db_pool: &DatabasePool,
    config: &AppConfig,
) -> CatalogResult<Arc<CatalogModule>> {
    let builder = CatalogModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .with_component_parameters::<ProductServiceComponent>(ProductServiceComponentParameters {
            cache_ttl: config.cache.ttl(),
            key_prefix: config.cache.key_prefix.clone(),
        });

    let builder = match config.cache.backend {
        CacheBackend::Redis => {
            let pool = create_redis_pool(&config.redis.url, config.redis.pool_size)?;
            builder.with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
                pool: Some(pool),
                operation_timeout: config.cache.operation_timeout(),
            })
        }
        CacheBackend::Memory => {
            builder.with_component_override::<dyn CacheInterface>(Box::new(InMemoryCache::new()))
        }
        CacheBackend::Disabled => {
            builder.with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
                pool: None,
                operation_timeout: config.cache.operation_timeout(),
            })
        }
    };

    info!(
        "Cache backend: {} (ttl {}s)",
        config.cache.backend, config.cache.ttl_secs
    );

    Ok(Arc::new(builder.build()))
}
