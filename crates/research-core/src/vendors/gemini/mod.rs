//! Gemini `generateContent` integration.
//!
//! The request is a single prompt part and only the first part of the first
//! candidate is read back.
mod adapter;
mod config;
pub(crate) mod transport;

pub use adapter::GeminiClient;
pub use config::GeminiClientConfig;
pub use transport::{
    Candidate, CandidateContent, CompletionRequestBody, CompletionResponse, EMPTY_CONTENT_TEXT,
    PARSE_ERROR_PREFIX, Part, RequestContent, extract_text,
};
