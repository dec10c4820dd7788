// API Server Binary Entry Point
//
// Purpose: Serve the placement planner over HTTP
// Usage: cargo run --features api --bin api_server

use anyhow::Context;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zoo_enclosure_planner::{create_router, AppState, Planner, PlannerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "zoo_enclosure_planner=info,tower_http=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = PlannerConfig::from_env()?;

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    tracing::info!("Configuration:");
    tracing::info!("  ZOO_LOCALE: {:?}", config.locale);
    tracing::info!("  PORT: {}", port);

    let planner = Planner::builtin()
        .context("built-in catalog failed validation")?
        .with_config(config);
    tracing::info!(
        "Loaded {} species and {} enclosures",
        planner.catalog().traits().len(),
        planner.catalog().enclosures().len()
    );

    let app = create_router(AppState::new(planner));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
