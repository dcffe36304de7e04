//! HTTP route handlers.

pub mod data;

use axum::{Json, Router};

use crate::dto::HealthResponse;
use crate::router::StrictSlash;
use crate::telemetry;

/// Registers `GET /health` and the `/api/v1` group on `router`.
///
/// Call once per router. Registering the same path twice panics in axum.
pub fn register_routes(router: Router) -> Router {
    let api = Router::new().get_strict("/data", data::mock_data);

    router
        .get_strict("/health", health)
        .nest("/api/v1", telemetry::with_request_tracing(api))
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
    })
}
