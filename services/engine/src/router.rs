use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    chart::calculate_chart,
    health::{healthz, readyz, service_status},
    otp::{send_otp, verify_otp},
};
use crate::middleware::{request_id_layer, require_api_secret};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/", get(service_status))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Chart calculation
        .route("/calculate", post(calculate_chart))
        // OTP
        .route("/send-otp", post(send_otp))
        .route("/verify-otp", post(verify_otp))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_secret,
        ))
        .layer(request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
