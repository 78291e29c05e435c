//! Financial entry data model and API request/response types.
//!
//! Revenue and expense amounts are recorded per entry; profit is always
//! derived as `revenue - expense` and never stored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Represents a financial entry record from the database.
///
/// Maps to the `financial_entries` table. Multiple entries may share a
/// calendar day; the daily summary folds them together.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct FinancialEntry {
    /// Unique identifier for this entry
    pub id: Uuid,

    /// Business that owns this entry
    pub business_id: Uuid,

    /// Calendar day the amounts apply to
    pub date: NaiveDate,

    /// Revenue in cents
    pub revenue_cents: i64,

    /// Expense in cents
    pub expense_cents: i64,

    /// Timestamp when the entry was created
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a new financial entry.
///
/// # JSON Example
///
/// ```json
/// {
///   "date": "2025-12-20",
///   "revenue_cents": 100000,
///   "expense_cents": 40000
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateFinancialEntryRequest {
    pub date: NaiveDate,

    #[serde(default)]
    pub revenue_cents: i64,

    #[serde(default)]
    pub expense_cents: i64,
}

impl CreateFinancialEntryRequest {
    /// Validate the creation payload: both amounts non-negative.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.revenue_cents < 0 {
            return Err(AppError::InvalidRequest(
                "Revenue must not be negative".to_string(),
            ));
        }
        if self.expense_cents < 0 {
            return Err(AppError::InvalidRequest(
                "Expense must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Partial update for a financial entry. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateFinancialEntryRequest {
    pub date: Option<NaiveDate>,
    pub revenue_cents: Option<i64>,
    pub expense_cents: Option<i64>,
}

impl UpdateFinancialEntryRequest {
    /// Validate the patch; at least one field must be present and
    /// amounts must be non-negative.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.date.is_none() && self.revenue_cents.is_none() && self.expense_cents.is_none() {
            return Err(AppError::InvalidRequest(
                "Update must change at least one field".to_string(),
            ));
        }
        if let Some(revenue) = self.revenue_cents {
            if revenue < 0 {
                return Err(AppError::InvalidRequest(
                    "Revenue must not be negative".to_string(),
                ));
            }
        }
        if let Some(expense) = self.expense_cents {
            if expense < 0 {
                return Err(AppError::InvalidRequest(
                    "Expense must not be negative".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Response body for financial entry endpoints.
///
/// Includes the derived `profit_cents` alongside the stored amounts.
#[derive(Debug, Serialize)]
pub struct FinancialEntryResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    pub revenue_cents: i64,
    pub expense_cents: i64,
    pub profit_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl From<FinancialEntry> for FinancialEntryResponse {
    fn from(entry: FinancialEntry) -> Self {
        Self {
            id: entry.id,
            date: entry.date,
            profit_cents: entry.revenue_cents - entry.expense_cents,
            revenue_cents: entry.revenue_cents,
            expense_cents: entry.expense_cents,
            created_at: entry.created_at,
        }
    }
}

/// One row of the daily financial summary.
///
/// Field names match what the cash-flow chart expects:
///
/// ```json
/// { "day": "2025-12-20", "revenue": 120000, "expenses": 50000, "profit": 70000 }
/// ```
#[derive(Debug, PartialEq, Serialize)]
pub struct DailySummaryRow {
    pub day: NaiveDate,
    pub revenue: i64,
    pub expenses: i64,
    pub profit: i64,
}

/// Envelope around the daily summary rows.
///
/// The dashboard reads `data` from the response body, so the rows are
/// wrapped rather than returned as a bare array.
#[derive(Debug, Serialize)]
pub struct DailySummaryResponse {
    pub data: Vec<DailySummaryRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_negative_revenue() {
        let request = CreateFinancialEntryRequest {
            date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
            revenue_cents: -1,
            expense_cents: 0,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn create_rejects_negative_expense() {
        let request = CreateFinancialEntryRequest {
            date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
            revenue_cents: 0,
            expense_cents: -40000,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn response_derives_profit() {
        let entry = FinancialEntry {
            id: Uuid::new_v4(),
            business_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
            revenue_cents: 100_000,
            expense_cents: 40_000,
            created_at: Utc::now(),
        };
        let response = FinancialEntryResponse::from(entry);
        assert_eq!(response.profit_cents, 60_000);
    }

    #[test]
    fn update_rejects_empty_patch() {
        let patch = UpdateFinancialEntryRequest {
            date: None,
            revenue_cents: None,
            expense_cents: None,
        };
        assert!(patch.validate().is_err());
    }
}
