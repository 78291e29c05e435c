//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Validates input and resolves the caller's business scope
//! 3. Delegates to a service and returns a JSON response

/// Business setup and join endpoints
pub mod business;
/// Financial entry endpoints and daily summary
pub mod financial;
/// Fuel log endpoints and per-vehicle spend summary
pub mod fuels;
/// Health check endpoint
pub mod health;
/// Product inventory endpoints
pub mod products;
