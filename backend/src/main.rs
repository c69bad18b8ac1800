use std::sync::Arc;

use backend::{
    config,
    server::{self, AppState},
};
use research_core::{
    ResearchService, observability::init_observability, vendors::gemini::GeminiClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::init();
    init_observability();

    let server_config = config::ServerConfig::from_env();
    let client = GeminiClient::from_env()?;
    let state = AppState::new(ResearchService::new(Arc::new(client)));
    server::serve(&server_config, state).await
}
