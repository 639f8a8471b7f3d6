//! Product lookup controller.

use crate::{
    responses::{ok, ApiResult, AppError},
    state::AppState,
};
use catalog_core::{CatalogError, ProductId};
use catalog_service::ProductResponse;
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use tracing::debug;

/// Creates the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products/:id", get(get_product))
        .route("/products/", get(missing_product_id))
}

/// Get a product by ID.
///
/// The identifier is parsed before any cache or store access.
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(
        ("id" = String, Path, description = "Decimal product identifier")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, description = "Malformed product identifier", body = catalog_core::ErrorResponse),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Store failure", body = catalog_core::ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ProductResponse> {
    debug!("Get product request: {}", id);

    let product_id = ProductId::parse(&id)?;
    let response = state.product_service.get_product(product_id).await?;
    ok(response)
}

/// `GET /products/` carries an empty identifier.
async fn missing_product_id() -> AppError {
    AppError(CatalogError::validation("Invalid product ID: empty"))
}
