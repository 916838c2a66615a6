use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Engine service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid or missing API Secret")]
    InvalidApiSecret,
    #[error("No OTP found for this email")]
    OtpNotFound,
    #[error("Invalid OTP")]
    OtpMismatch,
    /// Failure from the chart calculation collaborator; its message is
    /// surfaced to the caller verbatim.
    #[error("{0}")]
    Calculation(anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl EngineError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidApiSecret => "INVALID_API_SECRET",
            Self::OtpNotFound => "OTP_NOT_FOUND",
            Self::OtpMismatch => "INVALID_OTP",
            Self::Calculation(_) => "CALCULATION_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidApiSecret => StatusCode::FORBIDDEN,
            Self::OtpNotFound | Self::OtpMismatch => StatusCode::BAD_REQUEST,
            Self::Calculation(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        match &self {
            Self::Calculation(e) => tracing::error!(error = %e, kind = "CALCULATION_FAILED", "calculation error"),
            Self::Internal(e) => tracing::error!(error = %e, kind = "INTERNAL", "internal error"),
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
