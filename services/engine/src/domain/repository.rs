#![allow(async_fn_in_trait)]

use crate::domain::types::BirthDetails;
use crate::error::EngineError;

/// Store for active one-time passcodes, keyed by recipient identity.
///
/// One active code per identity: `put` silently overwrites. A record
/// exists iff a code was issued and not yet successfully verified.
pub trait OtpStore: Send + Sync {
    async fn put(&self, identity: &str, code: &str) -> Result<(), EngineError>;

    async fn get(&self, identity: &str) -> Result<Option<String>, EngineError>;

    /// Remove the record for an identity. Removing an absent identity is
    /// not an error.
    async fn delete(&self, identity: &str) -> Result<(), EngineError>;
}

/// Port for the external chart calculation collaborator.
pub trait ChartPort: Send + Sync {
    /// Calculate a chart. The result is opaque to the service and
    /// returned to the caller verbatim.
    fn calculate(&self, details: &BirthDetails) -> anyhow::Result<serde_json::Value>;
}

/// Port for outbound OTP mail delivery.
pub trait MailPort: Send + Sync {
    async fn send_otp(&self, to: &str, code: &str) -> anyhow::Result<()>;
}
