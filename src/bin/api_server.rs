// API Server Binary Entry Point
//
// Purpose: Start the Axum API server for zone distributions
// Usage: cargo run --features api --bin api_server

use mountain_zones::{create_router, AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "mountain_zones=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let max_batch_queries: usize = std::env::var("MAX_BATCH_QUERIES")
        .ok()
        .and_then(|n| n.parse().ok())
        .unwrap_or(1000);

    tracing::info!("Configuration:");
    tracing::info!("  PORT: {}", port);
    tracing::info!("  MAX_BATCH_QUERIES: {}", max_batch_queries);

    let app = create_router(AppState::new(max_batch_queries));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
