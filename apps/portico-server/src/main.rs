//! Portico Server
//!
//! Serves the item repository over HTTP and the echo service over gRPC.
//! The repository backend (memory or SQLite) is chosen from configuration.

mod backend;
mod config;
mod dto;
mod handlers;
mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use portico_domain::{ItemConfig, ItemService};
use portico_rpc::EchoHandler;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::backend::ItemBackend;
use crate::config::{LogFormat, ServerConfig};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub item_service: Arc<ItemService<ItemBackend>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env().context("invalid server configuration")?;

    init_tracing(config.log_format);

    info!("Starting Portico server");

    let backend = ItemBackend::from_config(&config).await?;
    info!(backend = backend.name(), "Item repository ready");

    let service = ItemService::new(
        backend,
        ItemConfig {
            max_text_len: config.max_text_len,
        },
    );

    // Create shared application state
    let state = AppState {
        item_service: Arc::new(service),
    };

    // Build HTTP router
    let app = routes::create_router(state);

    let http_listener = TcpListener::bind(config.http_addr)
        .await
        .with_context(|| format!("failed to bind HTTP address {}", config.http_addr))?;
    let grpc_listener = TcpListener::bind(config.grpc_addr)
        .await
        .with_context(|| format!("failed to bind gRPC address {}", config.grpc_addr))?;

    info!(addr = %config.http_addr, "Starting HTTP server");

    let http = async {
        axum::serve(http_listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")
    };
    let echo = Arc::new(EchoHandler::new());
    let grpc = async {
        portico_rpc::serve(grpc_listener, Arc::clone(&echo), shutdown_signal())
            .await
            .context("gRPC server failed")
    };

    tokio::try_join!(http, grpc)?;

    info!(echo_calls = echo.served(), "Portico server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
