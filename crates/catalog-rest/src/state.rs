//! Application state for Axum handlers.

use catalog_core::HealthCheck;
use catalog_repository::{DatabaseHealthCheck, DatabasePoolInterface};
use catalog_service::{CacheHealthCheck, CacheInterface, ProductService};
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<dyn ProductService>,
    pub health_checks: Arc<[Arc<dyn HealthCheck>]>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        product_service: Arc<dyn ProductService>,
        health_checks: Vec<Arc<dyn HealthCheck>>,
    ) -> Self {
        Self {
            product_service,
            health_checks: health_checks.into(),
        }
    }

    /// Resolves the product service and health checks from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module
            + HasComponent<dyn ProductService>
            + HasComponent<dyn DatabasePoolInterface>
            + HasComponent<dyn CacheInterface>,
    {
        let product_service: Arc<dyn ProductService> = module.resolve();
        let pool: Arc<dyn DatabasePoolInterface> = module.resolve();
        let cache: Arc<dyn CacheInterface> = module.resolve();

        Self::new(
            product_service,
            vec![
                Arc::new(DatabaseHealthCheck::new(pool)),
                Arc::new(CacheHealthCheck::new(cache)),
            ],
        )
    }
}
