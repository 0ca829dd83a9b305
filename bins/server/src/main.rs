//! Casa dashboard server
//!
//! Main entry point for the household dashboard backend.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use casa_api::{AppState, create_router};
use casa_client::ApiClient;
use casa_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "casa=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Household API client
    let client = ApiClient::new(&config.upstream).context("Failed to build HTTP client")?;
    info!(
        base_url = %client.base_url(),
        timeout_secs = config.upstream.timeout_secs,
        "Household API configured"
    );

    let state = AppState {
        api: Arc::new(client),
        dashboard: config.dashboard.clone(),
    };

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
