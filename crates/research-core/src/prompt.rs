use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ResearchError;

const SUMMARIZE_PREAMBLE: &str =
    "Provide a clear and concise summary of the following text in a few sentences:\n\n";
const SUGGEST_PREAMBLE: &str = "Based on the following content, suggest related topics and further readings, formatted with clear headings and bullet points.";

/// Operation requested by the caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Operation {
    /// Short prose summary of the content.
    Summarize,
    /// Related topics and further readings for the content.
    Suggest,
}

impl Operation {
    /// Wire literal for this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summarize => "Summarize",
            Self::Suggest => "Suggest",
        }
    }

    fn preamble(&self) -> &'static str {
        match self {
            Self::Summarize => SUMMARIZE_PREAMBLE,
            Self::Suggest => SUGGEST_PREAMBLE,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ResearchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Summarize" => Ok(Self::Summarize),
            "Suggest" => Ok(Self::Suggest),
            other => Err(ResearchError::InvalidOperation(other.to_string())),
        }
    }
}

/// Builds the prompt sent upstream: the operation preamble followed by the
/// untouched content.
pub fn build_prompt(operation: Operation, content: &str) -> String {
    let preamble = operation.preamble();
    let mut prompt = String::with_capacity(preamble.len() + content.len());
    prompt.push_str(preamble);
    prompt.push_str(content);
    prompt
}

/// Inbound research request as received on the wire.
///
/// The operation stays a raw string until [`ResearchRequest::operation`] so an
/// unknown value surfaces as [`ResearchError::InvalidOperation`] instead of a
/// generic decode failure.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResearchRequest {
    pub operation: String,
    #[serde(default)]
    pub content: String,
}

impl ResearchRequest {
    pub fn new(operation: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            content: content.into(),
        }
    }

    /// Resolves the requested operation.
    pub fn operation(&self) -> Result<Operation, ResearchError> {
        self.operation.parse()
    }

    /// Resolves the operation and builds the prompt for it.
    pub fn build_prompt(&self) -> Result<String, ResearchError> {
        Ok(build_prompt(self.operation()?, &self.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_prompt_has_preamble_then_content() {
        let content = "Rust is a systems language.\nIt has \"quotes\".";
        let prompt = build_prompt(Operation::Summarize, content);
        assert!(prompt.starts_with(
            "Provide a clear and concise summary of the following text in a few sentences:\n\n"
        ));
        assert!(prompt.ends_with(content));
        assert_eq!(prompt.len(), SUMMARIZE_PREAMBLE.len() + content.len());
    }

    #[test]
    fn suggest_prompt_is_preamble_directly_followed_by_content() {
        let prompt = build_prompt(Operation::Suggest, "Ownership");
        assert_eq!(
            prompt,
            "Based on the following content, suggest related topics and further readings, formatted with clear headings and bullet points.Ownership"
        );
    }

    #[test]
    fn empty_content_yields_bare_preamble() {
        assert_eq!(build_prompt(Operation::Summarize, ""), SUMMARIZE_PREAMBLE);
        assert_eq!(build_prompt(Operation::Suggest, ""), SUGGEST_PREAMBLE);
    }

    #[test]
    fn unknown_operation_is_rejected() {
        for value in ["Translate", "summarize", "SUGGEST", "", " Summarize"] {
            let err = ResearchRequest::new(value, "anything")
                .build_prompt()
                .expect_err("unknown operation");
            assert_eq!(err, ResearchError::InvalidOperation(value.to_string()));
        }
    }

    #[test]
    fn operation_round_trips_through_display() {
        for op in [Operation::Summarize, Operation::Suggest] {
            assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn request_decodes_with_missing_content() {
        let req: ResearchRequest =
            serde_json::from_str(r#"{"operation":"Suggest"}"#).expect("decode");
        assert_eq!(req.content, "");
        assert_eq!(req.operation(), Ok(Operation::Suggest));
    }
}
