//! Product entity.

use crate::ProductId;
use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// Products are created out-of-band and are read-only for this service.
/// The serialized form (`id`, `name`, `description`, `price`) is both the
/// HTTP response body and the cache entry format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Product {
    /// Unique identifier for the product.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Price as an opaque integer amount.
    pub price: i64,
}

impl Product {
    /// Creates a product with the given details.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let product = Product::new(ProductId(1), "Product 1", "Description of product 1", 100);
        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"name":"Product 1","description":"Description of product 1","price":100}"#
        );
    }

    #[test]
    fn test_deserialize_cache_entry() {
        let json = r#"{"id":3,"name":"Product 3","description":"Description of product 3","price":300}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId(3));
        assert_eq!(product.price, 300);
    }
}
