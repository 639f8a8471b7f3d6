//! Cache key generators for consistent key naming.

use catalog_core::ProductId;

/// Default prefix for all cache keys to namespace them.
pub const DEFAULT_PREFIX: &str = "catalog:cache";

/// Generate a cache key for a product by ID.
///
/// The ID is rendered in canonical decimal form, so `"007"` and `"7"`
/// share one entry.
#[must_use]
pub fn product_by_id(prefix: &str, id: ProductId) -> String {
    format!("{}:product:id:{}", prefix, id)
}
