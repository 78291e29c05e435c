//! Business setup and membership HTTP handlers.
//!
//! This module implements the tenant-scope endpoints:
//! - POST /api/business/setup - Create a business and attach the caller
//! - POST /api/business/join - Join an existing business with its key
//! - GET /api/business - The caller's business details

use crate::{
    db::DbPool,
    error::AppError,
    middleware::auth::AuthContext,
    models::business::{Business, JoinBusinessRequest, SetupBusinessRequest},
    services::business_service,
};
use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};

/// Set up a new business.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Lanka Bricks",
///   "location": "Colombo"
/// }
/// ```
///
/// # Response (201 Created)
///
/// Returns the business including the generated join key. The key is
/// what teammates use to join, so callers should copy it.
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "name": "Lanka Bricks",
///   "location": "Colombo",
///   "join_key": "3f2a9c0d1e4b5a6f7890abcdef123456",
///   "created_at": "2025-12-20T10:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - **400**: blank name/location, or the key already has a business
/// - **401**: invalid API key
pub async fn setup_business(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<SetupBusinessRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    let business =
        business_service::setup(&pool, auth.api_key_id, auth.business_id, request).await?;

    tracing::info!(business_id = %business.id, "business created");

    Ok((StatusCode::CREATED, Json(business)))
}

/// Join an existing business with its shared key.
///
/// # Request Body
///
/// ```json
/// {
///   "business_key": "3f2a9c0d1e4b5a6f7890abcdef123456"
/// }
/// ```
///
/// # Errors
///
/// - **400**: caller already belongs to a business
/// - **404**: no business has that join key
pub async fn join_business(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<JoinBusinessRequest>,
) -> Result<Json<Business>, AppError> {
    let business = business_service::join(
        &pool,
        auth.api_key_id,
        auth.business_id,
        &request.business_key,
    )
    .await?;

    tracing::info!(business_id = %business.id, "api key joined business");

    Ok(Json(business))
}

/// Get the caller's business.
///
/// # Errors
///
/// - **404**: key not attached to a business yet. Unlike the data
///   routes, "no business" here is an absent resource, not a
///   forbidden one.
pub async fn get_business(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Business>, AppError> {
    let business_id = auth.business_id.ok_or(AppError::RecordNotFound)?;
    let business = business_service::get(&pool, business_id).await?;

    Ok(Json(business))
}
