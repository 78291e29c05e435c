//! Fuel log data model and API request/response types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Represents a fuel log record from the database.
///
/// Maps to the `fuel_logs` table. One row per refuelling of a vehicle,
/// scoped to the owning business.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct FuelLog {
    /// Unique identifier for this log entry
    pub id: Uuid,

    /// Business that owns this log entry
    pub business_id: Uuid,

    /// Vehicle the fuel went into
    pub vehicle_name: String,

    /// Calendar day of the refuelling
    pub date: NaiveDate,

    /// Liters filled, always positive
    pub liters: f64,

    /// Cost of the fill in cents
    pub cost_cents: i64,

    /// Timestamp when the log entry was created
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a new fuel log.
///
/// # JSON Example
///
/// ```json
/// {
///   "vehicle_name": "Lorry 1",
///   "date": "2025-12-20",
///   "liters": 42.5,
///   "cost_cents": 1530000
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateFuelLogRequest {
    pub vehicle_name: String,
    pub date: NaiveDate,
    pub liters: f64,
    pub cost_cents: i64,
}

impl CreateFuelLogRequest {
    /// Validate the creation payload: vehicle name non-blank,
    /// liters strictly positive, cost non-negative.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.vehicle_name.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "Vehicle name must not be empty".to_string(),
            ));
        }
        if !(self.liters > 0.0) {
            return Err(AppError::InvalidRequest(
                "Liters must be positive".to_string(),
            ));
        }
        if self.cost_cents < 0 {
            return Err(AppError::InvalidRequest(
                "Cost must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Partial update for a fuel log. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateFuelLogRequest {
    pub vehicle_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub liters: Option<f64>,
    pub cost_cents: Option<i64>,
}

impl UpdateFuelLogRequest {
    /// Validate the patch under the creation rules; at least one field
    /// must be present.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.vehicle_name.is_none()
            && self.date.is_none()
            && self.liters.is_none()
            && self.cost_cents.is_none()
        {
            return Err(AppError::InvalidRequest(
                "Update must change at least one field".to_string(),
            ));
        }
        if let Some(ref vehicle) = self.vehicle_name {
            if vehicle.trim().is_empty() {
                return Err(AppError::InvalidRequest(
                    "Vehicle name must not be empty".to_string(),
                ));
            }
        }
        if let Some(liters) = self.liters {
            if !(liters > 0.0) {
                return Err(AppError::InvalidRequest(
                    "Liters must be positive".to_string(),
                ));
            }
        }
        if let Some(cost) = self.cost_cents {
            if cost < 0 {
                return Err(AppError::InvalidRequest(
                    "Cost must not be negative".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Response body for fuel log endpoints (internal scope field removed).
#[derive(Debug, Serialize)]
pub struct FuelLogResponse {
    pub id: Uuid,
    pub vehicle_name: String,
    pub date: NaiveDate,
    pub liters: f64,
    pub cost_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl From<FuelLog> for FuelLogResponse {
    fn from(log: FuelLog) -> Self {
        Self {
            id: log.id,
            vehicle_name: log.vehicle_name,
            date: log.date,
            liters: log.liters,
            cost_cents: log.cost_cents,
            created_at: log.created_at,
        }
    }
}

/// One row of the per-vehicle spend summary.
///
/// Field names are camelCased to match what the dashboard bar chart
/// expects:
///
/// ```json
/// { "vehicleName": "Lorry 1", "totalSpent": 4530000 }
/// ```
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSpendRow {
    pub vehicle_name: String,
    pub total_spent: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateFuelLogRequest {
        CreateFuelLogRequest {
            vehicle_name: "Lorry 1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
            liters: 42.5,
            cost_cents: 1_530_000,
        }
    }

    #[test]
    fn create_accepts_valid_payload() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn create_rejects_blank_vehicle() {
        let mut request = valid_create();
        request.vehicle_name = " ".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn create_rejects_zero_liters() {
        let mut request = valid_create();
        request.liters = 0.0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn create_rejects_nan_liters() {
        let mut request = valid_create();
        request.liters = f64::NAN;
        assert!(request.validate().is_err());
    }

    #[test]
    fn create_rejects_negative_cost() {
        let mut request = valid_create();
        request.cost_cents = -1;
        assert!(request.validate().is_err());
    }

    #[test]
    fn update_rejects_empty_patch() {
        let patch = UpdateFuelLogRequest {
            vehicle_name: None,
            date: None,
            liters: None,
            cost_cents: None,
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn vehicle_spend_row_uses_chart_field_names() {
        let row = VehicleSpendRow {
            vehicle_name: "Lorry 1".to_string(),
            total_spent: 4_530_000,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["vehicleName"], "Lorry 1");
        assert_eq!(json["totalSpent"], 4_530_000);
    }
}
