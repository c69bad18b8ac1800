use tracing::{debug, error};

use crate::client::CompletionClient;
use crate::errors::ResearchError;

use super::config::GeminiClientConfig;
use super::transport::{CompletionRequestBody, extract_text};

/// Completion client for Gemini's `generateContent` endpoint.
///
/// Holds one `reqwest::Client` that is reused across calls.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiClientConfig,
}

impl GeminiClient {
    /// Creates a client from explicit configuration.
    pub fn new(config: GeminiClientConfig) -> Result<Self, ResearchError> {
        if config.base_url.trim().is_empty() {
            return Err(ResearchError::Config(
                "Gemini client config base_url must not be empty".into(),
            ));
        }
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ResearchError::Config(format!("failed to build Gemini client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Creates a client from `GEMINI_*` environment variables.
    pub fn from_env() -> Result<Self, ResearchError> {
        Self::new(GeminiClientConfig::from_env()?)
    }

    async fn send(&self, body: &CompletionRequestBody) -> Result<String, ResearchError> {
        let response = self
            .client
            .post(self.config.endpoint_url())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                ResearchError::transport(format!("Gemini request failed: {}", e.without_url()))
            })?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ResearchError::transport(format!(
                "Gemini request failed with status {status}: {body}"
            )));
        }
        response.text().await.map_err(|e| {
            ResearchError::transport(format!(
                "failed to read Gemini response body: {}",
                e.without_url()
            ))
        })
    }
}

#[async_trait::async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, ResearchError> {
        let body = CompletionRequestBody::from_prompt(prompt);
        debug!(
            event = "gemini.request_sent",
            domain = "gemini",
            prompt_bytes = prompt.len() as u64,
            timeout_ms = self.config.timeout.map(|t| t.as_millis() as u64)
        );
        match self.send(&body).await {
            Ok(raw) => {
                debug!(
                    event = "gemini.response_received",
                    domain = "gemini",
                    response_bytes = raw.len() as u64
                );
                Ok(extract_text(&raw))
            }
            Err(err) => {
                error!(event = "gemini.request_failed", domain = "gemini", error = %err);
                Err(err)
            }
        }
    }
}
