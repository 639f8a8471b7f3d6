//! Integration tests for PostgresProductRepository.
//!
//! These tests run against a real PostgreSQL database using testcontainers.
//! They need Docker; run them with `cargo test -- --ignored`.

mod common;

use catalog_core::{CatalogError, HealthCheck, Product, ProductId};
use catalog_repository::{
    DatabaseHealthCheck, DatabasePoolInterface, PostgresProductRepository, ProductRepository,
};
use common::TestDatabase;

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_seeded_product() {
    let db = TestDatabase::new().await;
    let repo = PostgresProductRepository::new(db.pool());

    let found = repo
        .find_by_id(ProductId::new(1))
        .await
        .expect("Query failed")
        .expect("Product not found");

    assert_eq!(
        found,
        Product::new(ProductId::new(1), "Product 1", "Description of product 1", 100)
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_id_not_found() {
    let db = TestDatabase::new().await;
    let repo = PostgresProductRepository::new(db.pool());

    let result = repo.find_by_id(ProductId::new(999)).await.expect("Query failed");
    assert!(result.is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_id_beyond_int4_range_is_not_found() {
    let db = TestDatabase::new().await;
    let repo = PostgresProductRepository::new(db.pool());

    let result = repo
        .find_by_id(ProductId::new(i64::from(i32::MAX) + 1))
        .await
        .expect("Query failed");
    assert!(result.is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_null_columns_decode_to_defaults() {
    let db = TestDatabase::new().await;
    let pool = db.pool();

    let id: i32 = sqlx::query_scalar("INSERT INTO products (name) VALUES (NULL) RETURNING id")
        .fetch_one(pool.inner())
        .await
        .expect("Insert failed");

    let repo = PostgresProductRepository::new(pool);
    let found = repo
        .find_by_id(ProductId::new(i64::from(id)))
        .await
        .expect("Query failed")
        .expect("Product not found");

    assert!(found.name.is_empty());
    assert!(found.description.is_empty());
    assert_eq!(found.price, 0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_closed_pool_surfaces_database_error() {
    let db = TestDatabase::new().await;
    let pool = db.pool();
    pool.close().await;

    let repo = PostgresProductRepository::new(pool);
    let err = repo.find_by_id(ProductId::new(1)).await.unwrap_err();
    assert!(matches!(err, CatalogError::Database(_)));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_health_check_reports_status() {
    let db = TestDatabase::new().await;
    let pool = db.pool();
    let check = DatabaseHealthCheck::new(pool.clone());

    assert!(check.check().await.is_healthy());

    pool.close().await;
    assert!(check.check().await.is_unhealthy());
}
