//! Eligibility verification API server.
//!
//! Exposes a health probe and a placeholder data endpoint:
//!
//! - `GET /health` returns `{"status":"healthy"}`
//! - `GET /api/v1/data` returns `{"message":"Mock data endpoint"}`
//!
//! Paths with a trailing slash redirect to their canonical form.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod telemetry;

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::error::ServerError;

/// Port the server listens on.
pub const PORT: u16 = 8080;

/// Builds the application router with every route registered.
pub fn app() -> Router {
    handlers::register_routes(router::new_router())
}

/// Binds a TCP listener on `addr`.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves `app` on `listener` until the server loop exits.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
