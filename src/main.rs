//! Archive Server
//!
//! Serves a folder-organized PDF archive: document listings, per-category
//! counts, first-page thumbnails and the original files, all behind Basic
//! authentication.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use archive_server::config::Config;
use archive_server::pdf::MupdfEngine;
use archive_server::routes;
use archive_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "archive_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse()
        .validate()
        .context("Invalid configuration")?;

    tracing::info!("Starting Archive Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Archive path = {}", config.archive.path.display());
    tracing::info!("Listening port = {}", config.server.port);
    tracing::info!(
        "Thumbnails at {} dpi, JPEG quality {}",
        config.archive.thumbnail_dpi,
        config.archive.jpeg_quality
    );

    let app_state = AppState::from_config(&config, Arc::new(MupdfEngine::new()));
    let app = routes::router(app_state);

    // Start server with graceful shutdown
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
