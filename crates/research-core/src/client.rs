use crate::errors::ResearchError;

/// Completion backend contract used by the research service.
///
/// Implementations perform exactly one upstream call per `complete` and fold
/// malformed or empty upstream payloads into the returned text. Only transport
/// failures are returned as errors.
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ResearchError>;
}
