//! Research assistant core: prompt building and a single-shot completion
//! client.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use research_core::prelude::*;
//! use research_core::vendors::gemini::GeminiClient;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), ResearchError> {
//! let service = ResearchService::new(Arc::new(GeminiClient::from_env()?));
//! let text = service
//!     .process(&ResearchRequest::new("Summarize", "Rust is a systems language."))
//!     .await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

/// Completion backend contract.
pub mod client;
/// Public error types.
pub mod errors;
/// Tracing subscriber bootstrap.
pub mod observability;
/// Common imports for typical usage.
pub mod prelude;
/// Operations, inbound requests and prompt construction.
pub mod prompt;
/// Request to completion orchestration.
pub mod service;
/// Vendor-specific completion clients.
pub mod vendors;

pub use client::CompletionClient;
pub use errors::ResearchError;
pub use prompt::{Operation, ResearchRequest, build_prompt};
pub use service::ResearchService;
