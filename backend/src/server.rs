use std::sync::Arc;

use anyhow::Result;
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use research_core::{ResearchRequest, ResearchService};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Instrument as _, info, info_span, warn};

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: ResearchService,
}

impl AppState {
    pub fn new(service: ResearchService) -> Self {
        Self { service }
    }
}

/// Builds the application router with CORS open to every origin.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    Router::new()
        .route("/api/research/process", post(process_content))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Binds the listener and serves until the process exits.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(event = "server.listening", domain = "http", addr = %addr);
    axum::serve(listener, router(state))
        .await
        .map_err(|e| anyhow::anyhow!("research server stopped: {e}"))
}

async fn health_check() -> &'static str {
    "ok"
}

async fn process_content(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResearchRequest>,
) -> Result<String, AppError> {
    let request_id = uuid::Uuid::new_v4();
    let span = info_span!(
        "research.process",
        %request_id,
        operation = %request.operation
    );
    async move {
        match state.service.process(&request).await {
            Ok(text) => {
                info!(
                    event = "research.completed",
                    domain = "research",
                    response_bytes = text.len() as u64
                );
                Ok(text)
            }
            Err(err) => {
                warn!(event = "research.failed", domain = "research", error = %err);
                Err(AppError::from(err))
            }
        }
    }
    .instrument(span)
    .await
}
