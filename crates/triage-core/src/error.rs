//! Error types for triage-core
//!
//! This module provides error types and user-friendly error formatting.

use thiserror::Error;

/// Core error type
#[derive(Debug, Error)]
pub enum Error {
    /// A stage, skill or tool has no registered mapping or handler
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A reducer precondition failed
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// Skill or tool execution failed
    #[error("external call failed for {target}: {message}")]
    ExternalCall {
        /// Skill or tool identifier
        target: String,
        /// Failure description from the collaborator
        message: String,
    },

    /// The coordinator produced a decision the run loop cannot dispatch
    #[error("unhandled coordinator decision: {0}")]
    UnhandledDecision(String),

    /// Neither a goal nor a workflow was supplied when building a state
    #[error("invalid initial state: {0}")]
    InvalidInitialState(String),
}

impl Error {
    /// Wrap a collaborator failure for the given skill or tool
    pub fn external(target: impl std::fmt::Display, source: impl std::fmt::Display) -> Self {
        Self::ExternalCall {
            target: target.to_string(),
            message: source.to_string(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for user-friendly error messages
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get a suggestion for how to fix the error
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for Error {
    fn user_message(&self) -> String {
        match self {
            Error::Configuration(msg) => format!("⚙️ Workflow configuration error: {}", msg),
            Error::InvariantViolation(msg) => format!("🧩 Workflow state is inconsistent: {}", msg),
            Error::ExternalCall { target, message } => {
                format!("🔧 '{}' failed: {}", target, message)
            }
            Error::UnhandledDecision(msg) => {
                format!("🧭 Coordinator produced an unusable decision: {}", msg)
            }
            Error::InvalidInitialState(msg) => format!("📋 Cannot start the workflow: {}", msg),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            Error::Configuration(_) | Error::UnhandledDecision(_) => Some(
                "💡 Check that every stage has a transition rule and every skill/tool a reducer."
                    .to_string(),
            ),
            Error::ExternalCall { .. } => Some(
                "💡 Check the inbox/archive paths and that the model server is reachable, then rerun the cycle."
                    .to_string(),
            ),
            Error::InvalidInitialState(_) => {
                Some("💡 Provide either a goal or a workflow memory.".to_string())
            }
            Error::InvariantViolation(_) => None,
        }
    }
}

/// Format an error for display in the CLI
pub fn format_error_for_cli(error: &Error) -> String {
    let mut output = String::new();

    output.push_str(&error.user_message());
    output.push('\n');

    if let Some(suggestion) = error.suggestion() {
        output.push('\n');
        output.push_str(&suggestion);
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests;
