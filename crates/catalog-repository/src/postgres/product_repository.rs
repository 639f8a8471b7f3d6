//! PostgreSQL product repository implementation.

use crate::{traits::ProductRepository, DatabasePoolInterface};
use catalog_core::{CatalogResult, Product, ProductId};
use async_trait::async_trait;
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// PostgreSQL product repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = ProductRepository)]
pub struct PostgresProductRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PostgresProductRepository {
    /// Creates a new PostgreSQL product repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a product.
///
/// The table declares no NOT NULL constraints beyond the key, so every
/// payload column may come back NULL.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i32,
    name: Option<String>,
    description: Option<String>,
    price: Option<i32>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId::new(i64::from(row.id)),
            name: row.name.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            price: row.price.map(i64::from).unwrap_or_default(),
        }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        debug!("Finding product by id: {}", id);

        // `id` is SERIAL (int4) while ProductId is i64; Postgres compares
        // int4 = int8 natively, so larger ids simply match nothing.
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Product::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conversion() {
        let row = ProductRow {
            id: 1,
            name: Some("Product 1".to_string()),
            description: Some("Description of product 1".to_string()),
            price: Some(100),
        };

        let product = Product::from(row);
        assert_eq!(
            product,
            Product::new(ProductId(1), "Product 1", "Description of product 1", 100)
        );
    }

    #[test]
    fn test_row_conversion_null_columns() {
        let row = ProductRow {
            id: 4,
            name: None,
            description: None,
            price: None,
        };

        let product = Product::from(row);
        assert_eq!(product.id, ProductId(4));
        assert!(product.name.is_empty());
        assert!(product.description.is_empty());
        assert_eq!(product.price, 0);
    }
}
