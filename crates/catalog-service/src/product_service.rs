//! Product service trait definition.

use crate::dto::ProductResponse;
use catalog_core::{CatalogResult, Interface, ProductId};
use async_trait::async_trait;

/// Product service trait.
#[async_trait]
pub trait ProductService: Interface + Send + Sync {
    /// Gets a product by ID, serving from cache when possible.
    ///
    /// Returns `CatalogError::NotFound` when the store has no such product
    /// and `CatalogError::Database` when the store cannot be reached.
    async fn get_product(&self, id: ProductId) -> CatalogResult<ProductResponse>;
}
