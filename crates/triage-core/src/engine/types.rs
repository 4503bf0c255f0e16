//! Engine identifiers
//!
//! - `WorkflowStage`: named positions in the workflow state machine
//! - `ActionType`: categories of action the coordinator can request

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Stages of the agent workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowStage {
    /// Bootstrap stage before any work has happened
    Initial,
    /// Open-ended planning stage driven by the analyze-and-plan skill
    Coordinator,
    /// Terminal stage
    Completed,
    /// Fresh scan of the inbox directory
    CheckInbox,
    /// AI analysis of the current email
    AnalyzeEmail,
    /// Append the current analysis to the report
    SaveToExcel,
    /// Move the current email into the archive
    ArchiveEmail,
    /// Decide whether another email is queued
    CheckNextEmail,
}

impl WorkflowStage {
    /// All declared stages, in workflow order
    pub const ALL: [WorkflowStage; 8] = [
        Self::Initial,
        Self::Coordinator,
        Self::Completed,
        Self::CheckInbox,
        Self::AnalyzeEmail,
        Self::SaveToExcel,
        Self::ArchiveEmail,
        Self::CheckNextEmail,
    ];

    /// Returns the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "INITIAL",
            Self::Coordinator => "COORDINATOR",
            Self::Completed => "COMPLETED",
            Self::CheckInbox => "CHECK_INBOX",
            Self::AnalyzeEmail => "ANALYZE_EMAIL",
            Self::SaveToExcel => "SAVE_TO_EXCEL",
            Self::ArchiveEmail => "ARCHIVE_EMAIL",
            Self::CheckNextEmail => "CHECK_NEXT_EMAIL",
        }
    }
}

impl std::fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkflowStage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == normalized)
            .ok_or_else(|| Error::Configuration(format!("unknown workflow stage: {s}")))
    }
}

/// Types of actions that the coordinator can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Invoke an AI-backed skill
    LlmSkill,
    /// Invoke a deterministic tool
    Tool,
    /// Stop: the workflow is done
    Complete,
    /// Stop: nothing to do
    Noop,
}

impl ActionType {
    /// Returns the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LlmSkill => "llm_skill",
            Self::Tool => "tool",
            Self::Complete => "complete",
            Self::Noop => "noop",
        }
    }

    /// Whether this action ends the run loop
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Noop)
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
