/// Engine service configuration loaded from environment variables.
#[derive(Debug)]
pub struct EngineConfig {
    /// Shared secret expected in `x-api-secret` on gated routes.
    /// Unset or empty → open mode (every request passes). Env var: `API_SECRET`.
    pub api_secret: Option<String>,
    /// Outbound mail account, also used as the From address. Env var: `SMTP_EMAIL`.
    pub smtp_email: Option<String>,
    /// Outbound mail credential. Env var: `SMTP_PASSWORD`.
    pub smtp_password: Option<String>,
    /// TCP port to listen on (default 8000). Env var: `PORT`.
    pub port: u16,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self {
            api_secret: std::env::var("API_SECRET").ok().filter(|s| !s.is_empty()),
            smtp_email: std::env::var("SMTP_EMAIL").ok().filter(|s| !s.is_empty()),
            smtp_password: std::env::var("SMTP_PASSWORD")
                .ok()
                .filter(|s| !s.is_empty()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }
}
