use rand::RngExt;
use tokio::sync::mpsc::UnboundedSender;
use tracing::error;

use crate::domain::repository::OtpStore;
use crate::domain::types::{OTP_CODE_LEN, OtpEmail};
use crate::error::EngineError;

/// Charset for generating OTP codes (decimal digits; leading zeros allowed).
const CHARSET: &[u8] = b"0123456789";

fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..OTP_CODE_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

// ── SendOtp ──────────────────────────────────────────────────────────────────

pub struct SendOtpInput {
    pub email: String,
}

pub struct SendOtpUseCase<S: OtpStore> {
    pub store: S,
    pub delivery: UnboundedSender<OtpEmail>,
}

impl<S: OtpStore> SendOtpUseCase<S> {
    pub async fn execute(&self, input: SendOtpInput) -> Result<(), EngineError> {
        // 1. Generate a fresh code; any active code for this identity is
        //    overwritten.
        let code = generate_code();
        self.store.put(&input.email, &code).await?;

        // 2. Hand the email to the delivery worker. The caller gets the
        //    acknowledgment regardless of delivery outcome.
        let job = OtpEmail {
            to: input.email,
            code,
        };
        if let Err(e) = self.delivery.send(job) {
            error!(error = %e, "delivery queue closed, OTP email dropped");
        }
        Ok(())
    }
}

// ── VerifyOtp ────────────────────────────────────────────────────────────────

pub struct VerifyOtpInput {
    pub email: String,
    pub otp: String,
}

pub struct VerifyOtpUseCase<S: OtpStore> {
    pub store: S,
}

impl<S: OtpStore> VerifyOtpUseCase<S> {
    pub async fn execute(&self, input: VerifyOtpInput) -> Result<(), EngineError> {
        let stored = self
            .store
            .get(&input.email)
            .await?
            .ok_or(EngineError::OtpNotFound)?;

        if stored != input.otp {
            // Record stays; the correct code may still be submitted later.
            return Err(EngineError::OtpMismatch);
        }

        // Single use: consume the record on match.
        self.store.delete(&input.email).await?;
        Ok(())
    }
}
