//! Financial entry service - SQL for revenue/expense records.

use crate::db::DbPool;
use crate::error::AppError;
use crate::models::financial_entry::{
    CreateFinancialEntryRequest, FinancialEntry, UpdateFinancialEntryRequest,
};
use chrono::NaiveDate;
use uuid::Uuid;

/// Insert a new financial entry owned by the given business.
pub async fn create(
    pool: &DbPool,
    business_id: Uuid,
    request: CreateFinancialEntryRequest,
) -> Result<FinancialEntry, AppError> {
    let entry = sqlx::query_as::<_, FinancialEntry>(
        r#"
        INSERT INTO financial_entries (business_id, date, revenue_cents, expense_cents)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(business_id)
    .bind(request.date)
    .bind(request.revenue_cents)
    .bind(request.expense_cents)
    .fetch_one(pool)
    .await?;

    Ok(entry)
}

/// List financial entries for a business, newest first, with an optional
/// inclusive date range.
pub async fn list(
    pool: &DbPool,
    business_id: Uuid,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<Vec<FinancialEntry>, AppError> {
    let entries = sqlx::query_as::<_, FinancialEntry>(
        r#"
        SELECT * FROM financial_entries
        WHERE business_id = $1
          AND ($2::date IS NULL OR date >= $2)
          AND ($3::date IS NULL OR date <= $3)
        ORDER BY created_at DESC
        "#,
    )
    .bind(business_id)
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

/// All financial entries for a business, used by the daily summary.
pub async fn list_all(pool: &DbPool, business_id: Uuid) -> Result<Vec<FinancialEntry>, AppError> {
    let entries =
        sqlx::query_as::<_, FinancialEntry>("SELECT * FROM financial_entries WHERE business_id = $1")
            .bind(business_id)
            .fetch_all(pool)
            .await?;

    Ok(entries)
}

/// Merge a partial update into a financial entry (404 if absent or foreign).
pub async fn update(
    pool: &DbPool,
    business_id: Uuid,
    entry_id: Uuid,
    patch: UpdateFinancialEntryRequest,
) -> Result<FinancialEntry, AppError> {
    let entry = sqlx::query_as::<_, FinancialEntry>(
        r#"
        UPDATE financial_entries
        SET date = COALESCE($3, date),
            revenue_cents = COALESCE($4, revenue_cents),
            expense_cents = COALESCE($5, expense_cents)
        WHERE id = $1 AND business_id = $2
        RETURNING *
        "#,
    )
    .bind(entry_id)
    .bind(business_id)
    .bind(patch.date)
    .bind(patch.revenue_cents)
    .bind(patch.expense_cents)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::RecordNotFound)?;

    Ok(entry)
}

/// Delete a financial entry owned by the given business.
pub async fn delete(pool: &DbPool, business_id: Uuid, entry_id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM financial_entries WHERE id = $1 AND business_id = $2")
        .bind(entry_id)
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

    fn entry(revenue_cents: i64, expense_cents: i64) -> CreateFinancialEntryRequest {
        CreateFinancialEntryRequest {
            date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
            revenue_cents,
            expense_cents,
        }
    }

    #[sqlx::test]
    async fn created_entry_appears_in_scoped_list_once(pool: PgPool) {
        let business_id = business(&pool, "Lanka Bricks").await;

        let created = create(&pool, business_id, entry(100_000, 40_000)).await.unwrap();

        let listed = list(&pool, business_id, None, None).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].revenue_cents, 100_000);
    }

    #[sqlx::test]
    async fn foreign_entry_reports_like_missing(pool: PgPool) {
        let owner = business(&pool, "Owner Bricks").await;
        let other = business(&pool, "Other Bricks").await;

        let created = create(&pool, owner, entry(100_000, 40_000)).await.unwrap();

        let patch = UpdateFinancialEntryRequest {
            date: None,
            revenue_cents: Some(1),
            expense_cents: None,
        };
        let foreign_update = update(&pool, other, created.id, patch).await;
        assert!(matches!(foreign_update, Err(AppError::RecordNotFound)));

        let foreign_delete = delete(&pool, other, created.id).await;
        assert!(matches!(foreign_delete, Err(AppError::RecordNotFound)));

        // Entries owned by a different business never leak into a list
        assert!(list_all(&pool, other).await.unwrap().is_empty());
        let owned = list_all(&pool, owner).await.unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].revenue_cents, 100_000);
    }
}
