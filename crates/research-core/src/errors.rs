/// Top-level error type for the research API.
///
/// Upstream parse failures and empty candidates are not represented here: they
/// are folded into the returned text by the completion client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResearchError {
    /// The requested operation is not one of the supported literals.
    #[error("Unknown operation: {0}")]
    InvalidOperation(String),
    /// Network, timeout or non-success status from the completion provider.
    #[error("transport error: {0}")]
    Transport(String),
    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl ResearchError {
    /// Creates a transport error from any displayable message.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }
}
