use axum::extract::{Request, State};
use axum::http::HeaderName;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tower_http::request_id::{MakeRequestId, RequestId, SetRequestIdLayer};
use tracing::warn;
use uuid::Uuid;

use crate::error::EngineError;
use crate::state::AppState;

/// Header carrying the shared secret on gated requests.
pub const API_SECRET_HEADER: &str = "x-api-secret";

/// Paths exempt from the secret gate (health checks).
const OPEN_PATHS: [&str; 3] = ["/", "/healthz", "/readyz"];

/// Request gate comparing `x-api-secret` against the configured shared
/// secret (case-sensitive exact match). Health checks pass through; with
/// no secret configured every request passes (open mode).
pub async fn require_api_secret(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if OPEN_PATHS.contains(&request.uri().path()) {
        return next.run(request).await;
    }
    let Some(secret) = state.api_secret.as_deref() else {
        warn!("API_SECRET not set, skipping security check");
        return next.run(request).await;
    };
    let provided = request
        .headers()
        .get(API_SECRET_HEADER)
        .and_then(|value| value.to_str().ok());
    if provided != Some(secret) {
        return EngineError::InvalidApiSecret.into_response();
    }
    next.run(request).await
}

#[derive(Clone, Default)]
pub struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(id.parse().unwrap()))
    }
}

/// Build the request-id layer. Apply with `.layer(request_id_layer())` in router.
pub fn request_id_layer() -> SetRequestIdLayer<MakeUuidRequestId> {
    SetRequestIdLayer::new(HeaderName::from_static("x-request-id"), MakeUuidRequestId)
}
