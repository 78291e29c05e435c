//! Business service - setup, join, and lookup of the tenant scope.

use crate::db::DbPool;
use crate::error::AppError;
use crate::models::business::{Business, SetupBusinessRequest};
use uuid::Uuid;

/// Create a business and attach the caller's API key to it.
///
/// Generates a fresh join key that teammates can later use to join.
/// Fails with 400 if the key is already attached to a business.
pub async fn setup(
    pool: &DbPool,
    api_key_id: Uuid,
    current_business: Option<Uuid>,
    request: SetupBusinessRequest,
) -> Result<Business, AppError> {
    if current_business.is_some() {
        return Err(AppError::InvalidRequest(
            "API key is already attached to a business".to_string(),
        ));
    }

    let join_key = generate_join_key();

    let mut tx = pool.begin().await?;

    let business = sqlx::query_as::<_, Business>(
        r#"
        INSERT INTO businesses (name, location, join_key)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(request.name.trim())
    .bind(request.location.trim())
    .bind(&join_key)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("UPDATE api_keys SET business_id = $1 WHERE id = $2")
        .bind(business.id)
        .bind(api_key_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(business)
}

/// Attach the caller's API key to the business owning `business_key`.
///
/// 404 if no business has that join key, so keys cannot be probed for
/// validity any more precisely than records can.
pub async fn join(
    pool: &DbPool,
    api_key_id: Uuid,
    current_business: Option<Uuid>,
    business_key: &str,
) -> Result<Business, AppError> {
    if current_business.is_some() {
        return Err(AppError::InvalidRequest(
            "API key is already attached to a business".to_string(),
        ));
    }

    let business =
        sqlx::query_as::<_, Business>("SELECT * FROM businesses WHERE join_key = $1")
            .bind(business_key.trim())
            .fetch_optional(pool)
            .await?
            .ok_or(AppError::RecordNotFound)?;

    sqlx::query("UPDATE api_keys SET business_id = $1 WHERE id = $2")
        .bind(business.id)
        .bind(api_key_id)
        .execute(pool)
        .await?;

    Ok(business)
}

/// The business a key is attached to (404 if none).
pub async fn get(pool: &DbPool, business_id: Uuid) -> Result<Business, AppError> {
    let business = sqlx::query_as::<_, Business>("SELECT * FROM businesses WHERE id = $1")
        .bind(business_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::RecordNotFound)?;

    Ok(business)
}

/// Generate a business join key: 16 random bytes, hex-encoded.
fn generate_join_key() -> String {
    let bytes: [u8; 16] = rand::random();
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_key_is_32_hex_chars() {
        let key = generate_join_key();
        assert_eq!(key.len(), 32);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn join_keys_are_unique() {
        assert_ne!(generate_join_key(), generate_join_key());
    }
}
