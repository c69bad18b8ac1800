use std::time::Duration;

use tracing::{error, warn};

use crate::errors::ResearchError;

/// Configuration for the Gemini completion client.
#[derive(Clone)]
pub struct GeminiClientConfig {
    /// Endpoint prefix, normally ending in the provider's `?key=` parameter.
    pub base_url: String,
    /// API key appended verbatim to `base_url`.
    pub api_key: String,
    /// Optional request timeout. `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for GeminiClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GeminiClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: None,
        }
    }

    /// Builds a config from `GEMINI_API_URL`, `GEMINI_API_KEY` and the optional
    /// `GEMINI_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ResearchError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ResearchError> {
        let base_url = lookup("GEMINI_API_URL").unwrap_or_default();
        if base_url.trim().is_empty() {
            return Err(ResearchError::Config(
                "missing GEMINI_API_URL for Gemini client".into(),
            ));
        }
        let api_key = lookup("GEMINI_API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            warn!(
                event = "gemini.config_missing_key",
                domain = "config",
                "GEMINI_API_KEY is empty; requests go to GEMINI_API_URL as-is"
            );
        }
        let mut config = Self::new(base_url.trim(), api_key.trim());
        if let Some(raw) = lookup("GEMINI_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config = config.timeout(Duration::from_secs(secs)),
                _ => error!(
                    event = "gemini.config_invalid_timeout",
                    domain = "config",
                    value = %raw,
                    "ignoring GEMINI_TIMEOUT_SECS"
                ),
            }
        }
        Ok(config)
    }

    /// Sets an explicit request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, self.api_key)
    }
}
