//! Router setup and server startup.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use aquassist_core::config::ServerConfig;
use aquassist_core::AquaError;

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/skill", post(handlers::skill))
        .layer(DefaultBodyLimit::max(256 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until the process is stopped.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), AquaError> {
    let addr = format!("{}:{}", config.host, config.port);

    let router = create_router(state);

    tracing::info!("Starting skill endpoint on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AquaError::Server(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .await
        .map_err(|e| AquaError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
