// Portfolio server entry point
//
// Usage: cargo run --bin portfolio_server
// Config: portfolio.toml (or $PORTFOLIO_CONFIG), overridden by env vars

use portfolio_site::{create_router, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config first: it decides the default log level
    let config = Config::load()?;

    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portfolio server...");
    tracing::info!("Configuration:");
    tracing::info!("  APP_NAME: {}", config.app_name);
    tracing::info!("  VERSION: {}", config.version);
    tracing::info!("  SERVICE_NAME: {}", config.service_name);
    tracing::info!("  DEBUG: {}", config.debug);
    tracing::info!("  STATIC_DIR: {}", config.static_dir);
    tracing::info!("  GCP_REGION: {}", config.gcp_region);

    let addr = config.bind_addr()?;

    // Validates content and renders every page once
    let state = AppState::new(config)?;
    tracing::info!("Application state initialized successfully");

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
