use std::time::Duration;
use tracing::warn;

/// Console settings, one instance per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Backend base URL including the API prefix, e.g. `http://localhost:3000/api/v1`
    pub api_base_url: String,

    /// Local storage key holding the auth token; survives "clear cache"
    pub auth_token_key: String,

    /// ISO 4217 code every amount is formatted in
    pub currency: String,

    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000/api/v1".to_string(),
            auth_token_key: "dormdesk-auth-token".to_string(),
            currency: "THB".to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

impl ConsoleConfig {
    /// Defaults overridden by `DORMDESK_API_URL`, `DORMDESK_AUTH_TOKEN_KEY`,
    /// `DORMDESK_CURRENCY` and `DORMDESK_REQUEST_TIMEOUT_MS`.
    pub fn from_environment() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("DORMDESK_API_URL") {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(key) = lookup("DORMDESK_AUTH_TOKEN_KEY") {
            config.auth_token_key = key;
        }
        if let Some(currency) = lookup("DORMDESK_CURRENCY") {
            config.currency = currency;
        }
        if let Some(timeout) = lookup("DORMDESK_REQUEST_TIMEOUT_MS") {
            match timeout.parse::<u64>() {
                Ok(ms) => config.request_timeout_ms = ms,
                Err(_) => warn!("Ignoring invalid DORMDESK_REQUEST_TIMEOUT_MS: {}", timeout),
            }
        }

        config
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
