//! HTTP server initialization and runtime setup.
//!
//! Prepares the working directories and runs the Axum server until a shutdown
//! signal arrives.

use crate::config::Config;
use crate::infrastructure::storage::housekeeping::{ensure_writable, sweep_expired};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Upload and output directories (created, probed for writes)
/// - Startup retention sweep of the output directory
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - A working directory is not writable
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    ensure_writable(&config.upload_dir).with_context(|| {
        format!("Upload dir {} is not writable", config.upload_dir.display())
    })?;
    ensure_writable(&config.output_dir).with_context(|| {
        format!("Output dir {} is not writable", config.output_dir.display())
    })?;

    match sweep_expired(&config.output_dir, config.result_retention()) {
        Ok(removed) => tracing::info!(removed, "Startup sweep complete"),
        Err(e) => tracing::warn!(error = %e, "Startup sweep failed"),
    }

    let state = AppState::from_config(&config);
    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
