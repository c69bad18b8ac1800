use serde::{Deserialize, Serialize};

/// Returned when the upstream payload decodes but carries no usable text.
pub const EMPTY_CONTENT_TEXT: &str = "No valid content found in the response.";
/// Prefix of the text returned when the upstream payload does not decode.
pub const PARSE_ERROR_PREFIX: &str = "Error parsing response: ";

/// Outbound request body: `{"content":[{"parts":[{"text":...}]}]}`.
///
/// The outer key is `content`, not `contents`, and each entry holds `parts`
/// directly. Keep it that way for wire compatibility.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequestBody {
    pub content: Vec<RequestContent>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContent {
    pub parts: Vec<Part>,
}

impl CompletionRequestBody {
    /// Wraps `prompt` as the sole text part.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            content: vec![RequestContent {
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
            }],
        }
    }

    /// Text of the first part, if any.
    pub fn prompt(&self) -> Option<&str> {
        self.content
            .first()
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}

/// Inbound completion payload. Every level is optional and unknown fields
/// are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Option<Vec<Part>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl CompletionResponse {
    /// Text of the first part of the first candidate.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .as_deref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_deref()?
            .first()?
            .text
            .as_deref()
    }
}

/// Extracts the reply text from a raw upstream body.
///
/// Never fails: a body that does not decode yields
/// `"Error parsing response: <reason>"`, and a body without a first
/// candidate/part/text yields [`EMPTY_CONTENT_TEXT`].
pub fn extract_text(raw: &str) -> String {
    match serde_json::from_str::<CompletionResponse>(raw) {
        Err(e) => format!("{PARSE_ERROR_PREFIX}{e}"),
        Ok(response) => response
            .first_text()
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| EMPTY_CONTENT_TEXT.to_string()),
    }
}
