//! API Server setup

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::routes::create_router;
use crate::config::ServerConfig;
use crate::processor::ReceiptProcessor;

/// Router plus middleware
pub fn create_app(config: &ServerConfig, processor: ReceiptProcessor) -> Router {
    let mut router = create_router(processor).layer(TraceLayer::new_for_http());

    if config.cors_enabled() {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

/// Serve until Ctrl+C
pub async fn run_server(config: ServerConfig, processor: ReceiptProcessor) -> Result<()> {
    let addr = config.bind_addr()?;
    let app = create_app(&config, processor);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!(%addr, "receipt processor listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
