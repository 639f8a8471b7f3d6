//! Redis-based cache implementation.

use super::CacheInterface;
use catalog_core::{CatalogError, CatalogResult};
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use shaku::Component;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Default TTL for cached products (10 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// Default upper bound on one Redis round trip.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_millis(250);

/// Redis-based cache service.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct RedisCacheService {
    /// Redis connection pool.
    pool: Option<Arc<Pool>>,
    /// Upper bound on a single cache operation, including pool checkout.
    #[shaku(default = DEFAULT_OPERATION_TIMEOUT)]
    operation_timeout: Duration,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self {
            pool: Some(pool),
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    /// Create a cache service with a custom operation timeout.
    #[must_use]
    pub fn with_timeout(pool: Arc<Pool>, operation_timeout: Duration) -> Self {
        Self {
            pool: Some(pool),
            operation_timeout,
        }
    }

    /// Create a no-op cache service (for when caching is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            pool: None,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> CatalogResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                CatalogError::Cache(format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(CatalogError::Cache("Cache is disabled".to_string())),
        }
    }

    /// Runs one cache operation under the configured timeout.
    async fn bounded<T, F>(&self, op: &str, fut: F) -> CatalogResult<T>
    where
        F: Future<Output = CatalogResult<T>> + Send,
    {
        tokio::time::timeout(self.operation_timeout, fut)
            .await
            .map_err(|_| {
                CatalogError::Timeout(format!(
                    "Redis {} exceeded {:?}",
                    op, self.operation_timeout
                ))
            })?
    }
}

/// Creates a Redis connection pool from a URL.
///
/// Pool creation does not connect; unreachable servers surface as cache
/// errors on first use.
pub fn create_redis_pool(url: &str, max_size: usize) -> CatalogResult<Arc<Pool>> {
    let mut config = deadpool_redis::Config::from_url(url);
    config.pool = Some(deadpool_redis::PoolConfig::new(max_size));

    let pool = config
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .map_err(|e| CatalogError::Cache(format!("Failed to create Redis pool: {}", e)))?;

    Ok(Arc::new(pool))
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let value: Option<String> = self
            .bounded("GET", async {
                let mut conn = self.get_conn().await?;
                conn.get(key).await.map_err(|e| {
                    CatalogError::Cache(format!("Failed to get key '{}': {}", key, e))
                })
            })
            .await?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> CatalogResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let ttl_secs = ttl.as_secs().max(1);

        self.bounded("SET", async {
            let mut conn = self.get_conn().await?;
            conn.set_ex::<_, _, ()>(key, value, ttl_secs).await.map_err(|e| {
                CatalogError::Cache(format!("Failed to set key '{}': {}", key, e))
            })
        })
        .await?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn ping(&self) -> CatalogResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        self.bounded("PING", async {
            let mut conn = self.get_conn().await?;
            let _: String = deadpool_redis::redis::cmd("PING")
                .query_async(&mut conn)
                .await
                .map_err(|e| CatalogError::Cache(format!("Ping failed: {}", e)))?;
            Ok(())
        })
        .await
    }
}
