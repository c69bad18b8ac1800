//! Common imports for typical usage.
pub use crate::{
    CompletionClient, Operation, ResearchError, ResearchRequest, ResearchService, build_prompt,
};
