use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::state::AppState;
use crate::usecase::otp::{SendOtpInput, SendOtpUseCase, VerifyOtpInput, VerifyOtpUseCase};

// ── POST /send-otp ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SendOtpRequest {
    pub email: String,
}

#[derive(Serialize)]
pub struct SendOtpResponse {
    pub message: &'static str,
    pub status: &'static str,
}

pub async fn send_otp(
    State(state): State<AppState>,
    Json(body): Json<SendOtpRequest>,
) -> Result<Json<SendOtpResponse>, EngineError> {
    let usecase = SendOtpUseCase {
        store: state.otp_store(),
        delivery: state.delivery_queue(),
    };
    usecase.execute(SendOtpInput { email: body.email }).await?;
    Ok(Json(SendOtpResponse {
        message: "OTP processing",
        status: "sent",
    }))
}

// ── POST /verify-otp ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Serialize)]
pub struct VerifyOtpResponse {
    pub status: &'static str,
    pub message: &'static str,
}

pub async fn verify_otp(
    State(state): State<AppState>,
    Json(body): Json<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>, EngineError> {
    let usecase = VerifyOtpUseCase {
        store: state.otp_store(),
    };
    usecase
        .execute(VerifyOtpInput {
            email: body.email,
            otp: body.otp,
        })
        .await?;
    Ok(Json(VerifyOtpResponse {
        status: "success",
        message: "Verified successfully",
    }))
}
