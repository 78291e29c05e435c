//! Financial entry HTTP handlers.
//!
//! This module implements the financial API endpoints:
//! - POST /api/financial/create - Create new entry
//! - GET /api/financial/ - List entries for the caller's business
//! - PUT /api/financial/update/:id - Patch an entry
//! - DELETE /api/financial/delete/:id - Delete an entry
//! - GET /api/financial/getDailySummary - Per-day revenue/expense/profit

use crate::{
    db::DbPool,
    error::AppError,
    middleware::auth::AuthContext,
    models::financial_entry::{
        CreateFinancialEntryRequest, DailySummaryResponse, FinancialEntryResponse,
        UpdateFinancialEntryRequest,
    },
    services::{aggregation, financial_service},
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

/// Optional inclusive date range for entry listing.
#[derive(Debug, Deserialize)]
pub struct ListFinancialParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Create a new financial entry.
///
/// # Request Body
///
/// ```json
/// {
///   "date": "2025-12-20",
///   "revenue_cents": 100000,
///   "expense_cents": 40000
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the created entry with derived profit
/// - **Error (400)**: negative revenue or expense
pub async fn create_entry(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateFinancialEntryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let business_id = auth.require_business()?;
    request.validate()?;

    let entry = financial_service::create(&pool, business_id, request).await?;

    Ok((StatusCode::CREATED, Json(FinancialEntryResponse::from(entry))))
}

/// List financial entries for the authenticated business.
///
/// Supports `?from=` / `?to=` date-range filters.
pub async fn list_entries(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Query(params): Query<ListFinancialParams>,
) -> Result<Json<Vec<FinancialEntryResponse>>, AppError> {
    let business_id = auth.require_business()?;

    let entries = financial_service::list(&pool, business_id, params.from, params.to).await?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// Patch a financial entry. Absent fields are left unchanged.
pub async fn update_entry(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Path(entry_id): Path<Uuid>,
    Json(patch): Json<UpdateFinancialEntryRequest>,
) -> Result<Json<FinancialEntryResponse>, AppError> {
    let business_id = auth.require_business()?;
    patch.validate()?;

    let entry = financial_service::update(&pool, business_id, entry_id, patch).await?;

    Ok(Json(entry.into()))
}

/// Delete a financial entry.
///
/// # Response (200 OK)
///
/// ```json
/// { "deleted": true, "id": "550e8400-e29b-41d4-a716-446655440000" }
/// ```
pub async fn delete_entry(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Path(entry_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let business_id = auth.require_business()?;

    financial_service::delete(&pool, business_id, entry_id).await?;

    Ok(Json(json!({ "deleted": true, "id": entry_id })))
}

/// Daily revenue/expense/profit summary for the cash-flow chart.
///
/// # Response (200 OK)
///
/// Rows ordered ascending by day; days with no entries are omitted.
/// The chart reads the `data` envelope:
///
/// ```json
/// {
///   "data": [
///     { "day": "2025-12-20", "revenue": 120000, "expenses": 50000, "profit": 70000 }
///   ]
/// }
/// ```
pub async fn get_daily_summary(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<DailySummaryResponse>, AppError> {
    let business_id = auth.require_business()?;

    let entries = financial_service::list_all(&pool, business_id).await?;

    Ok(Json(DailySummaryResponse {
        data: aggregation::daily_summary(&entries),
    }))
}
