//! Business (tenant) model and setup/join request types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Represents a business record from the database.
///
/// Maps to the `businesses` table. A business is the ownership scope for
/// all products, fuel logs, and financial entries; every data query
/// filters on its id.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Business {
    /// Unique identifier for this business
    pub id: Uuid,

    /// Display name of the business
    pub name: String,

    /// Where the business operates
    pub location: String,

    /// Shared join key (32 hex characters)
    ///
    /// Anyone holding this key can attach their own API key to the
    /// business and see its records. It is shown on setup and on the
    /// business detail endpoint; holders are expected to share it only
    /// with their team.
    pub join_key: String,

    /// Timestamp when the business was created
    pub created_at: DateTime<Utc>,
}

/// Request body for setting up a new business.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Lanka Bricks",
///   "location": "Colombo"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct SetupBusinessRequest {
    pub name: String,
    pub location: String,
}

impl SetupBusinessRequest {
    /// Validate the setup payload: both fields must be non-blank.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "Business name must not be empty".to_string(),
            ));
        }
        if self.location.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "Business location must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Request body for joining an existing business with its shared key.
///
/// # JSON Example
///
/// ```json
/// {
///   "business_key": "3f2a9c0d1e4b5a6f7890abcdef123456"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct JoinBusinessRequest {
    pub business_key: String,
}
