//! Endpoint configuration, read once at startup.

/// Environment variable overriding the webhook endpoint.
pub const WEBHOOK_URL_VAR: &str = "CHARLA_WEBHOOK_URL";

/// Local development default.
const DEFAULT_WEBHOOK_URL: &str = "http://127.0.0.1:5001/webhook";

#[derive(Clone, Debug)]
pub struct Config {
    pub webhook_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let webhook_url = std::env::var(WEBHOOK_URL_VAR)
            .unwrap_or_else(|_| DEFAULT_WEBHOOK_URL.to_string());
        Self { webhook_url }
    }
}
