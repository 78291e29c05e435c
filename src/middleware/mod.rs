//! HTTP middleware components.
//!
//! Middleware runs before route handlers and can authenticate requests,
//! attach context, or short-circuit unauthorized calls.

/// API key authentication middleware
pub mod auth;
