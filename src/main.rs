mod api;
mod export;
mod pipeline;
mod reservations;
pub mod schema;
mod utils;

use axum::{routing::get, Router};
use dotenvy::dotenv;
use std::env;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber;

use api::handlers::{
    health::health,
    reservations::{export_reservations, get_reservations},
};
use utils::app_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    let app_config = AppConfig::from_env()?;
    tracing::info!("Application configuration loaded successfully");

    // Build router with all routes
    let router = Router::new()
        // Health check
        .route("/health", get(health))
        // Flexibility reservation endpoints
        .route(
            "/api/v1/flexibility/reservations/:asset_id/market/:market_id",
            get(get_reservations),
        )
        .route(
            "/api/v1/flexibility/reservations/:asset_id/market/:market_id/export",
            get(export_reservations),
        )
        // Middleware layers before state binding
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        // Shared state - applied after middleware
        .with_state(app_config);

    // Get port from environment or use default
    let port = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .unwrap_or(8080);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting reservation time service on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
