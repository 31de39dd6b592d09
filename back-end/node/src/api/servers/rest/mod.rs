//! REST API router configuration.
//!
//! This module contains route definitions and server startup logic.
//! All handler implementations are in their respective submodules.

mod health;
mod search;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::servers::app_state::AppState;
use crate::modules::search::RequestSearchError;

/// Build the REST API router with all routes.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::check))
        .route("/oracle/request_search", get(search::request_search))
        .route(
            "/oracle/multi_request_search",
            get(search::multi_request_search),
        )
        .with_state(app_state)
}

/// Bind `addr` and serve the REST API until the server stops.
pub async fn serve(app_state: AppState, addr: &str) -> Result<(), RequestSearchError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| RequestSearchError::internal(format!("failed to bind {}: {}", addr, e)))?;

    info!(addr = %addr, "REST server listening");

    axum::serve(listener, build_router(app_state))
        .await
        .map_err(|e| RequestSearchError::internal(format!("REST server error: {}", e)))
}
