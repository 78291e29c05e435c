//! Fuel log HTTP handlers.
//!
//! This module implements the fuel API endpoints:
//! - POST /api/fuels/create - Create new fuel log
//! - GET /api/fuels/ - List fuel logs for the caller's business
//! - PUT /api/fuels/update/:id - Patch a fuel log
//! - DELETE /api/fuels/delete/:id - Delete a fuel log
//! - GET /api/fuels/total-spent-per-vehicle - Spend summary per vehicle

use crate::{
    db::DbPool,
    error::AppError,
    middleware::auth::AuthContext,
    models::fuel_log::{
        CreateFuelLogRequest, FuelLogResponse, UpdateFuelLogRequest, VehicleSpendRow,
    },
    services::{aggregation, fuel_service, fuel_service::FuelLogFilters},
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

/// Optional query-string filters for fuel log listing.
///
/// `from`/`to` bound the date range inclusively.
#[derive(Debug, Deserialize)]
pub struct ListFuelLogsParams {
    pub vehicle: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Create a new fuel log.
///
/// # Request Body
///
/// ```json
/// {
///   "vehicle_name": "Lorry 1",
///   "date": "2025-12-20",
///   "liters": 42.5,
///   "cost_cents": 1530000
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the created log entry
/// - **Error (400)**: blank vehicle, non-positive liters, negative cost
pub async fn create_fuel_log(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateFuelLogRequest>,
) -> Result<impl IntoResponse, AppError> {
    let business_id = auth.require_business()?;
    request.validate()?;

    let log = fuel_service::create(&pool, business_id, request).await?;

    Ok((StatusCode::CREATED, Json(FuelLogResponse::from(log))))
}

/// List fuel logs for the authenticated business.
///
/// Supports `?vehicle=`, `?from=`, and `?to=` filters. Empty result is
/// an empty array, not an error.
pub async fn list_fuel_logs(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Query(params): Query<ListFuelLogsParams>,
) -> Result<Json<Vec<FuelLogResponse>>, AppError> {
    let business_id = auth.require_business()?;

    let filters = FuelLogFilters {
        vehicle: params.vehicle,
        from: params.from,
        to: params.to,
    };
    let logs = fuel_service::list(&pool, business_id, filters).await?;

    Ok(Json(logs.into_iter().map(Into::into).collect()))
}

/// Patch a fuel log. Absent fields are left unchanged.
pub async fn update_fuel_log(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Path(log_id): Path<Uuid>,
    Json(patch): Json<UpdateFuelLogRequest>,
) -> Result<Json<FuelLogResponse>, AppError> {
    let business_id = auth.require_business()?;
    patch.validate()?;

    let log = fuel_service::update(&pool, business_id, log_id, patch).await?;

    Ok(Json(log.into()))
}

/// Delete a fuel log.
///
/// # Response (200 OK)
///
/// ```json
/// { "deleted": true, "id": "550e8400-e29b-41d4-a716-446655440000" }
/// ```
pub async fn delete_fuel_log(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Path(log_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let business_id = auth.require_business()?;

    fuel_service::delete(&pool, business_id, log_id).await?;

    Ok(Json(json!({ "deleted": true, "id": log_id })))
}

/// Total fuel spend per vehicle for the dashboard bar chart.
///
/// # Response (200 OK)
///
/// One row per vehicle, ordered by vehicle name:
///
/// ```json
/// [
///   { "vehicleName": "Lorry 1", "totalSpent": 4530000 },
///   { "vehicleName": "Lorry 2", "totalSpent": 1200000 }
/// ]
/// ```
pub async fn total_spent_per_vehicle(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<VehicleSpendRow>>, AppError> {
    let business_id = auth.require_business()?;

    let logs = fuel_service::list_all(&pool, business_id).await?;

    Ok(Json(aggregation::total_spent_per_vehicle(&logs)))
}
