//! Product inventory HTTP handlers.
//!
//! This module implements the product API endpoints:
//! - POST /api/products/create - Create new product
//! - GET /api/products/ - List products for the caller's business
//! - PUT /api/products/update/:id - Patch a product
//! - DELETE /api/products/delete/:id - Delete a product

use crate::{
    db::DbPool,
    error::AppError,
    middleware::auth::AuthContext,
    models::product::{CreateProductRequest, ProductResponse, UpdateProductRequest},
    services::product_service,
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

/// Optional query-string filters for product listing.
#[derive(Debug, Deserialize)]
pub struct ListProductsParams {
    pub category: Option<String>,
}

/// Create a new product.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Oil Filter",
///   "category": "Spare Parts",
///   "quantity": 10,
///   "unit_price_cents": 50000
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the created product
/// - **Error (400)**: blank name, negative quantity or price
/// - **Error (401/403)**: invalid key / no business set up
///
/// Validation runs before anything is written; a rejected payload leaves
/// the store untouched.
pub async fn create_product(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    let business_id = auth.require_business()?;
    request.validate()?;

    let product = product_service::create(&pool, business_id, request).await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// List products for the authenticated business.
///
/// Supports an optional `?category=` filter. Returns an empty array when
/// nothing matches; zero results are not an error.
pub async fn list_products(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Query(params): Query<ListProductsParams>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let business_id = auth.require_business()?;

    let products = product_service::list(&pool, business_id, params.category).await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// Patch a product.
///
/// Absent fields are left unchanged. Returns the updated product.
///
/// # Errors
///
/// - **400**: empty patch or invalid field values
/// - **404**: no product with this id in the caller's business (a
///   product owned by another business reports the same way)
pub async fn update_product(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Path(product_id): Path<Uuid>,
    Json(patch): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    let business_id = auth.require_business()?;
    patch.validate()?;

    let product = product_service::update(&pool, business_id, product_id, patch).await?;

    Ok(Json(product.into()))
}

/// Delete a product.
///
/// # Response (200 OK)
///
/// ```json
/// { "deleted": true, "id": "550e8400-e29b-41d4-a716-446655440000" }
/// ```
///
/// # Errors
///
/// - **404**: missing or foreign-owned product
pub async fn delete_product(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Path(product_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let business_id = auth.require_business()?;

    product_service::delete(&pool, business_id, product_id).await?;

    Ok(Json(json!({ "deleted": true, "id": product_id })))
}
