//! Repository trait definitions.

use catalog_core::{CatalogResult, Interface, Product, ProductId};
use async_trait::async_trait;

/// Product repository trait.
///
/// A missing product is `Ok(None)`; `Err` is reserved for store failures so
/// callers never confuse "no such product" with "database unreachable".
#[async_trait]
pub trait ProductRepository: Interface + Send + Sync {
    /// Finds a product by ID.
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;
}
