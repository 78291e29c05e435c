//! BrickSync API - Main Application Entry Point
//!
//! REST backend for a small business-management dashboard. It provides
//! authenticated CRUD endpoints for products, fuel logs, and financial
//! entries, plus the aggregation endpoints behind the dashboard charts.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Authentication**: API key with SHA-256 hashing; records scoped
//!   to the key's business
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

mod config;
mod db;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;

use tracing_subscriber::EnvFilter;

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; reads RUST_LOG (defaults to "info")
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    // Business setup and membership
    let business_routes = Router::new()
        .route("/", get(handlers::business::get_business))
        .route("/setup", post(handlers::business::setup_business))
        .route("/join", post(handlers::business::join_business));

    // Product inventory
    let product_routes = Router::new()
        .route("/create", post(handlers::products::create_product))
        .route("/", get(handlers::products::list_products))
        .route("/update/{id}", put(handlers::products::update_product))
        .route("/delete/{id}", delete(handlers::products::delete_product));

    // Fuel logs and the per-vehicle spend summary
    let fuel_routes = Router::new()
        .route("/create", post(handlers::fuels::create_fuel_log))
        .route("/", get(handlers::fuels::list_fuel_logs))
        .route("/update/{id}", put(handlers::fuels::update_fuel_log))
        .route("/delete/{id}", delete(handlers::fuels::delete_fuel_log))
        .route(
            "/total-spent-per-vehicle",
            get(handlers::fuels::total_spent_per_vehicle),
        );

    // Financial entries and the daily summary
    let financial_routes = Router::new()
        .route("/create", post(handlers::financial::create_entry))
        .route("/", get(handlers::financial::list_entries))
        .route("/update/{id}", put(handlers::financial::update_entry))
        .route("/delete/{id}", delete(handlers::financial::delete_entry))
        .route(
            "/getDailySummary",
            get(handlers::financial::get_daily_summary),
        );

    // Every /api route sits behind the API key middleware
    let authenticated_routes = Router::new()
        .nest("/api/business", business_routes)
        .nest("/api/products", product_routes)
        .nest("/api/fuels", fuel_routes)
        .nest("/api/financial", financial_routes)
        .route_layer(axum_middleware::from_fn_with_state(
            pool.clone(),
            middleware::auth::auth_middleware,
        ));

    let app = Router::new()
        // Public routes (no authentication required)
        .route("/health", get(handlers::health::health_check))
        .merge(authenticated_routes)
        // The dashboard SPA is served from a different origin in development
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        // Share database pool with all handlers via State extraction
        .with_state(pool);

    // Bind to network address and start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
