use axum::{Json, http::StatusCode};
use serde::Serialize;

/// Identity body for `GET /` — the designated health check, open to
/// unauthenticated callers.
#[derive(Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
    pub service: &'static str,
}

pub async fn service_status() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "active",
        service: "Pariharam Astrology Engine",
    })
}

/// Handler for `GET /healthz` — liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness check.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
