use std::sync::Arc;

use research_core::observability::init_observability;
use research_core::prelude::*;
use research_core::vendors::gemini::GeminiClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ResearchError> {
    init_observability();
    let operation = std::env::args().nth(1).unwrap_or_else(|| "Summarize".into());
    let content = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "Rust guarantees memory safety without a garbage collector.".into());

    let service = ResearchService::new(Arc::new(GeminiClient::from_env()?));
    let text = service
        .process(&ResearchRequest::new(operation, content))
        .await?;

    println!("{text}");
    Ok(())
}
