// Server module - Provides the HTTP boundary around the repositories

use axum::Router;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::infrastructure::AppState;

/// Build the API router with the shared application state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api::api_router(state))
        .layer(TraceLayer::new_for_http())
}

/// Serve the router until the process is stopped
pub async fn serve(state: AppState, port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Catalog server listening on {}", addr);

    axum::serve(listener, build_router(state)).await
}
