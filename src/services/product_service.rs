//! Product service - SQL for the product inventory.
//!
//! All queries are scoped by `business_id`; a product id that exists but
//! belongs to another business behaves exactly like a missing one.

use crate::db::DbPool;
use crate::error::AppError;
use crate::models::product::{CreateProductRequest, Product, UpdateProductRequest};
use uuid::Uuid;

/// Insert a new product owned by the given business.
pub async fn create(
    pool: &DbPool,
    business_id: Uuid,
    request: CreateProductRequest,
) -> Result<Product, AppError> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (business_id, name, category, quantity, unit_price_cents)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(business_id)
    .bind(request.name.trim())
    .bind(request.category.trim())
    .bind(request.quantity)
    .bind(request.unit_price_cents)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// List products for a business, newest first, optionally filtered by
/// category.
pub async fn list(
    pool: &DbPool,
    business_id: Uuid,
    category: Option<String>,
) -> Result<Vec<Product>, AppError> {
    let products = sqlx::query_as::<_, Product>(
        r#"
        SELECT * FROM products
        WHERE business_id = $1
          AND ($2::text IS NULL OR category = $2)
        ORDER BY created_at DESC
        "#,
    )
    .bind(business_id)
    .bind(category)
    .fetch_all(pool)
    .await?;

    Ok(products)
}

/// Merge a partial update into a product.
///
/// Absent fields keep their stored values via COALESCE; the single
/// statement surfaces missing or foreign rows as `RecordNotFound`
/// without a prior read. Concurrent editors within a business are
/// last-write-wins.
pub async fn update(
    pool: &DbPool,
    business_id: Uuid,
    product_id: Uuid,
    patch: UpdateProductRequest,
) -> Result<Product, AppError> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        UPDATE products
        SET name = COALESCE($3, name),
            category = COALESCE($4, category),
            quantity = COALESCE($5, quantity),
            unit_price_cents = COALESCE($6, unit_price_cents),
            updated_at = NOW()
        WHERE id = $1 AND business_id = $2
        RETURNING *
        "#,
    )
    .bind(product_id)
    .bind(business_id)
    .bind(patch.name.as_deref().map(str::trim))
    .bind(patch.category.as_deref().map(str::trim))
    .bind(patch.quantity)
    .bind(patch.unit_price_cents)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::RecordNotFound)?;

    Ok(product)
}

/// Delete a product owned by the given business.
pub async fn delete(pool: &DbPool, business_id: Uuid, product_id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1 AND business_id = $2")
        .bind(product_id)
        .bind(business_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::RecordNotFound);
    }

    Ok(())
}
