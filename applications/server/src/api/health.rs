/// Health check API routes
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /api/health - liveness probe, identifies the service and build
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "aceplay",
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
