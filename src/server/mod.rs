//! HTTP server for the guild dashboard
//!
//! # Routes
//!
//! - `GET /` - `ranks.html` from the static directory
//! - `GET /api/status` - liveness and server time
//! - `GET /api/rankings?zoneID=<n>` - raw guild rankings for one zone
//! - `GET /api/allstars` - best all-stars entry per member per zone
//! - `GET /api/attendance` - not implemented (501)
//! - `GET /api/grm` - GRM roster export as JSON rows
//!
//! Any other path is looked up in the static directory.

mod handlers;
mod state;

use std::net::SocketAddr;
use std::path::Path;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};

pub use handlers::parse_zone_id;
pub use state::AppState;

use crate::error::Result;

/// Build the application router.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/api/status", get(handlers::status))
        .route("/api/rankings", get(handlers::rankings))
        .route("/api/allstars", get(handlers::allstars))
        .route("/api/attendance", get(handlers::attendance))
        .route("/api/grm", get(handlers::grm))
        .route_service("/", ServeFile::new(static_dir.join("ranks.html")))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}

/// Bind all interfaces on `port` and serve until Ctrl-C.
pub async fn serve(state: AppState, static_dir: &Path, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    log::info!("Server running on port {}", port);
    log::debug!("Serving static files from {}", static_dir.display());

    axum::serve(listener, build_router(state, static_dir))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
