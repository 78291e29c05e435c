//! API key authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the API key from the Authorization header
//! 2. Hash it and verify it exists in the database
//! 3. Inject authentication context into the request
//! 4. Reject unauthorized requests with HTTP 401

use crate::{db::DbPool, error::AppError, models::api_key::ApiKey};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Authentication context attached to authenticated requests.
///
/// Inserted into the request's extension map by [`auth_middleware`] and
/// extracted by route handlers via `Extension<AuthContext>`.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// ID of the authenticated API key
    pub api_key_id: Uuid,

    /// Name of the key holder
    pub label: String,

    /// Business the key is attached to, if setup/join has happened
    pub business_id: Option<Uuid>,
}

impl AuthContext {
    /// Business scope for data routes.
    ///
    /// Every product/fuel/financial query is filtered by this id. A key
    /// that has not set up or joined a business yet gets a 403.
    pub fn require_business(&self) -> Result<Uuid, AppError> {
        self.business_id.ok_or(AppError::BusinessNotSetup)
    }
}

/// SHA-256 hash of an API key, hex-encoded.
///
/// Keys are never stored or compared in clear; the database only holds
/// this hash.
pub fn hash_api_key(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hex::encode(hasher.finalize())
}

/// API key authentication middleware function.
///
/// # Flow
///
/// 1. Extract `Authorization: Bearer <key>` header from request
/// 2. Hash the `<key>` using SHA-256
/// 3. Query database for matching hash where `is_active = true`
/// 4. If found: inject [`AuthContext`] into request, call next handler
/// 5. If not found: return 401 Unauthorized error
///
/// Authentication failure is terminal for the request; nothing past this
/// middleware runs and no data is touched.
pub async fn auth_middleware(
    State(pool): State<DbPool>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::InvalidApiKey)?;

    // Expected format: "Bearer <api_key>"
    let api_key = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::InvalidApiKey)?;

    let key_hash = hash_api_key(api_key);

    // Lookup hashed key in database
    let api_key_record = sqlx::query_as::<_, ApiKey>(
        "SELECT id, key_hash, label, business_id, is_active, created_at
         FROM api_keys
         WHERE key_hash = $1 AND is_active = true",
    )
    .bind(&key_hash)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::InvalidApiKey)?;

    let auth_context = AuthContext {
        api_key_id: api_key_record.id,
        label: api_key_record.label,
        business_id: api_key_record.business_id,
    };

    // Handlers extract this with Extension<AuthContext>
    request.extensions_mut().insert(auth_context);

    Ok(next.run(request).await)
}
