//! Error types

use thiserror::Error;

/// Errors raised at the agent's input boundary
///
/// Detectors themselves have no error path: the absence of a finding is the
/// normal negative outcome, not a failure.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Invalid transaction event: {0}")]
    InvalidEvent(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown detector: {0}")]
    UnknownDetector(String),
}

/// Result type alias
pub type AgentResult<T> = Result<T, AgentError>;
