use axum_test::TestServer;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use pariharam_engine::domain::repository::ChartPort;
use pariharam_engine::domain::types::{BirthDetails, OtpEmail};
use pariharam_engine::infra::memory::MemoryOtpStore;
use pariharam_engine::router::build_router;
use pariharam_engine::state::AppState;

pub const TEST_SECRET: &str = "test-secret";

/// Build a test server plus handles to the store and the delivery queue
/// receiver. No delivery worker runs: queued jobs stay in the receiver,
/// which lets tests read the generated code and assert on (absent) side
/// effects.
pub fn test_server(
    api_secret: Option<&str>,
) -> (TestServer, MemoryOtpStore, UnboundedReceiver<OtpEmail>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let store = MemoryOtpStore::new();
    let state = AppState {
        otp_store: store.clone(),
        delivery: tx,
        api_secret: api_secret.map(str::to_owned),
    };
    let server = TestServer::new(build_router(state)).unwrap();
    (server, store, rx)
}

pub fn birth_details() -> BirthDetails {
    BirthDetails {
        year: 1994,
        month: 6,
        day: 21,
        hour: 5,
        minute: 45,
        lat: 9.9252,
        lon: 78.1198,
    }
}

// ── Mock chart ports ─────────────────────────────────────────────────────────

pub struct StubChartPort {
    pub result: serde_json::Value,
}

impl ChartPort for StubChartPort {
    fn calculate(&self, _details: &BirthDetails) -> anyhow::Result<serde_json::Value> {
        Ok(self.result.clone())
    }
}

pub struct FailingChartPort {
    pub message: &'static str,
}

impl ChartPort for FailingChartPort {
    fn calculate(&self, _details: &BirthDetails) -> anyhow::Result<serde_json::Value> {
        Err(anyhow::anyhow!("{}", self.message))
    }
}
