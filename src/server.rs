//! HTTP server initialization and runtime setup.
//!
//! Handles the Redis connection, state wiring, and Axum server lifecycle.

use crate::application::services::VisitService;
use crate::config::Config;
use crate::infrastructure::persistence::RedisVisitRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis connection (pooled via `ConnectionManager`, validated with PING)
/// - Visit service and shared state
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - The Redis connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = RedisVisitRepository::connect(&config.redis_url, config.visits_key.clone())
        .await
        .context("Failed to connect to Redis")?;

    let visit_service = Arc::new(VisitService::new(Arc::new(repository)));
    let state = AppState::new(visit_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
