//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! together with their API request/response types.

/// API key authentication model
pub mod api_key;
/// Business (tenant) model and setup/join requests
pub mod business;
/// Financial entry model and daily summary rows
pub mod financial_entry;
/// Fuel log model and per-vehicle spend rows
pub mod fuel_log;
/// Product inventory model
pub mod product;
