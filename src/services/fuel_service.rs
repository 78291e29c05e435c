//! Fuel log service - SQL for vehicle refuelling records.
//!
//! Same ownership discipline as the other services: every statement
//! matches on `business_id`.

use crate::db::DbPool;
use crate::error::AppError;
use crate::models::fuel_log::{CreateFuelLogRequest, FuelLog, UpdateFuelLogRequest};
use chrono::NaiveDate;
use uuid::Uuid;

/// Optional list filters for fuel logs.
#[derive(Debug, Default)]
pub struct FuelLogFilters {
    pub vehicle: Option<String>,
    /// Inclusive start of the date range
    pub from: Option<NaiveDate>,
    /// Inclusive end of the date range
    pub to: Option<NaiveDate>,
}

/// Insert a new fuel log owned by the given business.
pub async fn create(
    pool: &DbPool,
    business_id: Uuid,
    request: CreateFuelLogRequest,
) -> Result<FuelLog, AppError> {
    let log = sqlx::query_as::<_, FuelLog>(
        r#"
        INSERT INTO fuel_logs (business_id, vehicle_name, date, liters, cost_cents)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(business_id)
    .bind(request.vehicle_name.trim())
    .bind(request.date)
    .bind(request.liters)
    .bind(request.cost_cents)
    .fetch_one(pool)
    .await?;

    Ok(log)
}

/// List fuel logs for a business, newest first, with optional vehicle
/// and date-range filters.
pub async fn list(
    pool: &DbPool,
    business_id: Uuid,
    filters: FuelLogFilters,
) -> Result<Vec<FuelLog>, AppError> {
    let logs = sqlx::query_as::<_, FuelLog>(
        r#"
        SELECT * FROM fuel_logs
        WHERE business_id = $1
          AND ($2::text IS NULL OR vehicle_name = $2)
          AND ($3::date IS NULL OR date >= $3)
          AND ($4::date IS NULL OR date <= $4)
        ORDER BY created_at DESC
        "#,
    )
    .bind(business_id)
    .bind(filters.vehicle)
    .bind(filters.from)
    .bind(filters.to)
    .fetch_all(pool)
    .await?;

    Ok(logs)
}

/// All fuel logs for a business, used by the per-vehicle spend summary.
pub async fn list_all(pool: &DbPool, business_id: Uuid) -> Result<Vec<FuelLog>, AppError> {
    let logs = sqlx::query_as::<_, FuelLog>("SELECT * FROM fuel_logs WHERE business_id = $1")
        .bind(business_id)
        .fetch_all(pool)
        .await?;

    Ok(logs)
}

/// Merge a partial update into a fuel log (404 if absent or foreign).
pub async fn update(
    pool: &DbPool,
    business_id: Uuid,
    log_id: Uuid,
    patch: UpdateFuelLogRequest,
) -> Result<FuelLog, AppError> {
    let log = sqlx::query_as::<_, FuelLog>(
        r#"
        UPDATE fuel_logs
        SET vehicle_name = COALESCE($3, vehicle_name),
            date = COALESCE($4, date),
            liters = COALESCE($5, liters),
            cost_cents = COALESCE($6, cost_cents)
        WHERE id = $1 AND business_id = $2
        RETURNING *
        "#,
    )
    .bind(log_id)
    .bind(business_id)
    .bind(patch.vehicle_name.as_deref().map(str::trim))
    .bind(patch.date)
    .bind(patch.liters)
    .bind(patch.cost_cents)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::RecordNotFound)?;

    Ok(log)
}

/// Delete a fuel log owned by the given business.
pub async fn delete(pool: &DbPool, business_id: Uuid, log_id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM fuel_logs WHERE id = $1 AND business_id = $2")
        .bind(log_id)
        .bind(business_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::RecordNotFound);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::business::SetupBusinessRequest;
    use crate::services::business_service;
    use sqlx::PgPool;

    async fn business(pool: &PgPool, name: &str) -> Uuid {
        business_service::setup(
            pool,
            Uuid::new_v4(),
            None,
            SetupBusinessRequest {
                name: name.to_string(),
                location: "Colombo".to_string(),
            },
        )
        .await
        .unwrap()
        .id
    }

    fn refill(vehicle: &str) -> CreateFuelLogRequest {
        CreateFuelLogRequest {
            vehicle_name: vehicle.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
            liters: 42.5,
            cost_cents: 1_530_000,
        }
    }

    #[sqlx::test]
    async fn created_log_appears_in_scoped_list_once(pool: PgPool) {
        let business_id = business(&pool, "Lanka Bricks").await;

        let created = create(&pool, business_id, refill("Lorry 1")).await.unwrap();

        let listed = list(&pool, business_id, FuelLogFilters::default())
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
    }

    #[sqlx::test]
    async fn foreign_log_reports_like_missing(pool: PgPool) {
        let owner = business(&pool, "Owner Bricks").await;
        let other = business(&pool, "Other Bricks").await;

        let log = create(&pool, owner, refill("Lorry 1")).await.unwrap();

        let patch = UpdateFuelLogRequest {
            vehicle_name: None,
            date: None,
            liters: Some(10.0),
            cost_cents: None,
        };
        let foreign_update = update(&pool, other, log.id, patch).await;
        assert!(matches!(foreign_update, Err(AppError::RecordNotFound)));

        let foreign_delete = delete(&pool, other, log.id).await;
        assert!(matches!(foreign_delete, Err(AppError::RecordNotFound)));

        let missing_delete = delete(&pool, other, Uuid::new_v4()).await;
        assert!(matches!(missing_delete, Err(AppError::RecordNotFound)));

        // Still exactly one untouched log under the owning business
        let listed = list_all(&pool, owner).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].liters, 42.5);
    }
}
