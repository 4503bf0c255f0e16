//! Tools - deterministic external operations
//!
//! This module defines the closed set of tools the coordinator can request,
//! their structured responses, and the `ToolExecutor` seam implemented by the
//! filesystem collaborator.

use crate::error::{Error, Result};
use crate::memory::AgentState;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Names of available tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    /// Bootstrap greeting
    HelloWorld,
    /// List email files in the inbox
    CheckInbox,
    /// Load the current email
    ReadEmail,
    /// Append the current analysis to the report
    SaveToReport,
    /// Move the current email to the archive
    ArchiveEmail,
}

impl ToolName {
    /// All declared tools
    pub const ALL: [ToolName; 5] = [
        Self::HelloWorld,
        Self::CheckInbox,
        Self::ReadEmail,
        Self::SaveToReport,
        Self::ArchiveEmail,
    ];

    /// Returns the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HelloWorld => "hello_world",
            Self::CheckInbox => "check_inbox",
            Self::ReadEmail => "read_email",
            Self::SaveToReport => "save_to_report",
            Self::ArchiveEmail => "archive_email",
        }
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s.trim())
            .ok_or_else(|| Error::Configuration(format!("no tool registered as '{s}'")))
    }
}

/// Greeting returned by the bootstrap tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloWorldResponse {
    /// Greeting text
    pub message: String,
}

/// Files found in the inbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInboxResponse {
    /// Email file paths, in processing order
    pub files: Vec<PathBuf>,
    /// Number of files
    pub count: usize,
}

impl CheckInboxResponse {
    /// Build a response from a file list
    #[must_use]
    pub fn new(files: Vec<PathBuf>) -> Self {
        let count = files.len();
        Self { files, count }
    }
}

/// Content of an email file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadEmailResponse {
    /// File content
    pub content: String,
    /// File name without directory
    pub file_name: String,
}

/// Confirmation that a report row was written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveToReportResponse {
    /// Whether the row was written
    pub success: bool,
    /// Human-readable detail
    pub message: String,
}

/// Confirmation that an email was archived
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveEmailResponse {
    /// Whether the file was moved
    pub success: bool,
    /// Human-readable detail
    pub message: String,
}

/// Output of a tool execution, tagged by the tool that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
pub enum ToolOutput {
    /// Output of [`ToolName::HelloWorld`]
    HelloWorld(HelloWorldResponse),
    /// Output of [`ToolName::CheckInbox`]
    CheckInbox(CheckInboxResponse),
    /// Output of [`ToolName::ReadEmail`]
    ReadEmail(ReadEmailResponse),
    /// Output of [`ToolName::SaveToReport`]
    SaveToReport(SaveToReportResponse),
    /// Output of [`ToolName::ArchiveEmail`]
    ArchiveEmail(ArchiveEmailResponse),
}

impl ToolOutput {
    /// The tool whose output shape this is
    #[must_use]
    pub fn tool(&self) -> ToolName {
        match self {
            Self::HelloWorld(_) => ToolName::HelloWorld,
            Self::CheckInbox(_) => ToolName::CheckInbox,
            Self::ReadEmail(_) => ToolName::ReadEmail,
            Self::SaveToReport(_) => ToolName::SaveToReport,
            Self::ArchiveEmail(_) => ToolName::ArchiveEmail,
        }
    }
}

/// Executes deterministic tools against the current state
#[async_trait::async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Run a tool and return its structured output
    async fn execute(&self, tool: ToolName, state: &AgentState) -> Result<ToolOutput>;
}
