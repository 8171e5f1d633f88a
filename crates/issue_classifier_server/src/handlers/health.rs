//! GET /        - service banner
//! GET /health  - liveness probe, independent of the engine

use axum::Json;

use crate::proto::{HealthResponse, ServiceInfo, HEALTH_SERVICE_ID, SERVICE_NAME};

pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: HEALTH_SERVICE_ID.to_string(),
    })
}
