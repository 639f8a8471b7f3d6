//! Product-related DTOs.

use catalog_core::{Product, ProductId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product response.
///
/// Field order is part of the wire format: cached entries and HTTP bodies
/// are produced from this struct and must stay byte-identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    #[schema(value_type = i64, example = 1)]
    pub id: ProductId,
    #[schema(example = "Product 1")]
    pub name: String,
    #[schema(example = "Description of product 1")]
    pub description: String,
    #[schema(example = 100)]
    pub price: i64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_response_from_product() {
        let product = Product::new(ProductId(2), "Product 2", "Description of product 2", 200);
        let response = ProductResponse::from(product);

        assert_eq!(response.id, ProductId(2));
        assert_eq!(response.name, "Product 2");
        assert_eq!(response.price, 200);
    }

    #[test]
    fn test_serialization_matches_product() {
        let product = Product::new(ProductId(1), "Product 1", "Description of product 1", 100);
        let product_json = serde_json::to_string(&product).unwrap();
        let response_json = serde_json::to_string(&ProductResponse::from(product)).unwrap();

        assert_eq!(product_json, response_json);
    }
}
