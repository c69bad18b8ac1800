//! Vendor integrations implementing [`crate::CompletionClient`].
pub mod gemini;
