use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;

use crate::domain::repository::OtpStore;
use crate::error::EngineError;

/// Process-wide in-memory OTP store. The mutex serializes concurrent
/// issuance and verification; contents are lost on restart.
#[derive(Clone, Default)]
pub struct MemoryOtpStore {
    codes: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, EngineError> {
        self.codes
            .lock()
            .map_err(|_| EngineError::Internal(anyhow!("otp store mutex poisoned")))
    }
}

impl OtpStore for MemoryOtpStore {
    async fn put(&self, identity: &str, code: &str) -> Result<(), EngineError> {
        self.lock()?.insert(identity.to_owned(), code.to_owned());
        Ok(())
    }

    async fn get(&self, identity: &str) -> Result<Option<String>, EngineError> {
        Ok(self.lock()?.get(identity).cloned())
    }

    async fn delete(&self, identity: &str) -> Result<(), EngineError> {
        self.lock()?.remove(identity);
        Ok(())
    }
}
