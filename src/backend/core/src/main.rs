//! Vantage Server - Main entry point
//!
//! Serves the deployment version overview over HTTP.

use std::sync::Arc;

use vantage_core::{
    api::{self, AppState},
    config::Config,
    observability,
    overview::OverviewService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration; a config that cannot produce a grid is fatal here,
    // per-cell endpoint problems are not.
    let config = Config::load()?;
    config.overview.validate()?;

    // Initialize observability
    observability::init(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environments = config.overview.environments.len(),
        web_services = config.overview.web_services.len(),
        "Starting vantage server"
    );

    let metrics = observability::install_metrics_recorder()?;

    let state = AppState {
        service: Arc::new(OverviewService::new(config.overview.clone())),
        metrics,
    };

    let app = api::build_router(state);

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
