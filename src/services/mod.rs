//! Business logic services.
//!
//! Services hold the SQL and the pure computation, separated from the
//! HTTP handlers. Every data query is scoped by business id.

pub mod aggregation;
pub mod business_service;
pub mod financial_service;
pub mod fuel_service;
pub mod product_service;
