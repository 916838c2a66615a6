use tokio::sync::mpsc::UnboundedSender;

use crate::domain::types::OtpEmail;
use crate::infra::chart::JathagamChartPort;
use crate::infra::memory::MemoryOtpStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub otp_store: MemoryOtpStore,
    pub delivery: UnboundedSender<OtpEmail>,
    /// Shared secret for the request gate. `None` → open mode.
    pub api_secret: Option<String>,
}

impl AppState {
    pub fn otp_store(&self) -> MemoryOtpStore {
        self.otp_store.clone()
    }

    pub fn delivery_queue(&self) -> UnboundedSender<OtpEmail> {
        self.delivery.clone()
    }

    pub fn chart_port(&self) -> JathagamChartPort {
        JathagamChartPort
    }
}
