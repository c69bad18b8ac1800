use std::sync::Arc;

use tracing::debug;

use crate::client::CompletionClient;
use crate::errors::ResearchError;
use crate::prompt::ResearchRequest;

/// Maps a research request to a single completion call.
#[derive(Clone)]
pub struct ResearchService {
    client: Arc<dyn CompletionClient>,
}

impl ResearchService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Builds the prompt for `request` and returns the completion text.
    ///
    /// An unknown operation fails before the completion client is touched.
    pub async fn process(&self, request: &ResearchRequest) -> Result<String, ResearchError> {
        let prompt = request.build_prompt()?;
        debug!(
            event = "research.prompt_built",
            domain = "research",
            operation = %request.operation,
            content_bytes = request.content.len() as u64,
            prompt_bytes = prompt.len() as u64
        );
        self.client.complete(&prompt).await
    }
}
