//! Cache readiness probe.

use super::CacheInterface;
use catalog_core::{HealthCheck, HealthStatus};
use async_trait::async_trait;
use std::sync::Arc;

/// Health check for the cache backend.
///
/// The cache only affects latency, so an unreachable backend is reported
/// as degraded rather than unhealthy.
pub struct CacheHealthCheck {
    cache: Arc<dyn CacheInterface>,
}

impl CacheHealthCheck {
    /// Creates a health check for the given cache.
    #[must_use]
    pub fn new(cache: Arc<dyn CacheInterface>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl HealthCheck for CacheHealthCheck {
    fn name(&self) -> &str {
        "cache"
    }

    async fn check(&self) -> HealthStatus {
        if !self.cache.is_enabled() {
            return HealthStatus::Degraded("cache disabled".to_string());
        }

        match self.cache.ping().await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Degraded(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{create_redis_pool, InMemoryCache, RedisCacheService};
    use std::time::Duration;

    #[tokio::test]
    async fn test_memory_cache_is_healthy() {
        let check = CacheHealthCheck::new(Arc::new(InMemoryCache::new()));
        assert_eq!(check.name(), "cache");
        assert!(check.check().await.is_healthy());
    }

    #[tokio::test]
    async fn test_disabled_cache_is_degraded() {
        let check = CacheHealthCheck::new(Arc::new(RedisCacheService::disabled()));
        assert!(matches!(check.check().await, HealthStatus::Degraded(_)));
    }

    #[tokio::test]
    async fn test_unreachable_cache_is_degraded_not_unhealthy() {
        let pool = create_redis_pool("redis://127.0.0.1:1/0", 1).unwrap();
        let cache = RedisCacheService::with_timeout(pool, Duration::from_millis(500));
        let status = CacheHealthCheck::new(Arc::new(cache)).check().await;

        assert!(!status.is_healthy());
        assert!(!status.is_unhealthy());
    }
}
