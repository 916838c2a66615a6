use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{error, info};

use crate::domain::repository::MailPort;
use crate::domain::types::OtpEmail;
use crate::infra::smtp::SmtpMailer;

/// Create the delivery queue and spawn the worker draining it.
///
/// Issuance pushes jobs onto the queue and returns; delivery failures are
/// logged here and never reach the issuing request. No retries.
pub fn spawn_delivery_worker(mailer: SmtpMailer) -> UnboundedSender<OtpEmail> {
    let (tx, mut rx) = mpsc::unbounded_channel::<OtpEmail>();
    tokio::spawn(async move {
        while let Some(job) = rx.recv().await {
            match mailer.send_otp(&job.to, &job.code).await {
                Ok(()) => info!(to = %job.to, "OTP email sent"),
                Err(e) => error!(error = %e, to = %job.to, "failed to send OTP email"),
            }
        }
    });
    tx
}
