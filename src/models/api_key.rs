//! API key model for authentication.
//!
//! API keys authenticate callers against the service. Only the SHA-256
//! hash of a key is ever stored; the clear key lives with the caller.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Represents an API key record from the database.
///
/// Maps to the `api_keys` table. A key is created unattached and gains a
/// `business_id` once its holder sets up a business or joins one with a
/// shared join key. Multiple keys may point at the same business; that is
/// how a team shares one set of records.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApiKey {
    /// Unique identifier for this API key
    pub id: Uuid,

    /// SHA-256 hash of the actual key (64 hex characters)
    pub key_hash: String,

    /// Human-readable name of the key holder
    pub label: String,

    /// Business this key is attached to, if any
    ///
    /// `None` until setup/join; data routes reject such keys with 403.
    pub business_id: Option<Uuid>,

    /// Whether this key is currently active
    ///
    /// Inactive keys fail authentication, which allows revoking access
    /// without deleting the record.
    pub is_active: bool,

    /// Timestamp when this key was created
    pub created_at: DateTime<Utc>,
}
