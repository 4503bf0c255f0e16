//! Error types for triage-skills

use thiserror::Error;

/// Skill error type
#[derive(Debug, Error)]
pub enum Error {
    /// Prompt template could not be rendered
    #[error("template error: {0}")]
    Template(String),

    /// Network error
    #[error("network error: {0}")]
    Network(String),

    /// The model server returned an error status
    #[error("API error: {0}")]
    Api(String),

    /// Timeout
    #[error("timeout after {0}ms")]
    Timeout(u64),

    /// The model reply did not match the skill's output schema
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
