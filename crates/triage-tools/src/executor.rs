//! Filesystem tool executor

use crate::builtins;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;
use triage_core::{
    AgentState, CheckInboxResponse, HelloWorldResponse, ToolExecutor, ToolName, ToolOutput,
    WorkflowStage,
};

/// Directories and files the tools operate on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolPaths {
    /// Directory scanned for `*.txt` emails
    pub inbox: PathBuf,
    /// Directory processed emails are moved into
    pub archive: PathBuf,
    /// JSON Lines report file
    pub report: PathBuf,
}

impl ToolPaths {
    /// Create a path set
    #[must_use]
    pub fn new(
        inbox: impl Into<PathBuf>,
        archive: impl Into<PathBuf>,
        report: impl Into<PathBuf>,
    ) -> Self {
        Self {
            inbox: inbox.into(),
            archive: archive.into(),
            report: report.into(),
        }
    }
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self::new("data/inbox", "data/archive", "data/email_report.jsonl")
    }
}

/// `ToolExecutor` backed by the local filesystem
#[derive(Debug, Clone, Default)]
pub struct FsToolExecutor {
    paths: ToolPaths,
}

impl FsToolExecutor {
    /// Create an executor over the given paths
    #[must_use]
    pub fn new(paths: ToolPaths) -> Self {
        Self { paths }
    }

    /// Configured paths
    #[must_use]
    pub fn paths(&self) -> &ToolPaths {
        &self.paths
    }

    async fn dispatch(&self, tool: ToolName, state: &AgentState) -> Result<ToolOutput> {
        let emails = &state.working.email_processing;

        match tool {
            ToolName::HelloWorld => Ok(ToolOutput::HelloWorld(HelloWorldResponse {
                message: format!("Hello, World! Goal received: {}", state.workflow.goal()),
            })),
            ToolName::CheckInbox => {
                // The queue is fixed once scanned; later checks only report it.
                let files = if state.stage() == WorkflowStage::CheckNextEmail {
                    emails.inbox_files().to_vec()
                } else {
                    builtins::scan_inbox(&self.paths.inbox).await?
                };
                Ok(ToolOutput::CheckInbox(CheckInboxResponse::new(files)))
            }
            ToolName::ReadEmail => {
                let path = emails
                    .current_file()
                    .ok_or_else(|| Error::InvalidInput("no current file to read".to_string()))?;
                Ok(ToolOutput::ReadEmail(builtins::read_email(path).await?))
            }
            ToolName::SaveToReport => {
                let analysis = emails.current_analysis().ok_or_else(|| {
                    Error::InvalidInput("no analysis available to save".to_string())
                })?;
                Ok(ToolOutput::SaveToReport(
                    builtins::append_to_report(&self.paths.report, analysis).await?,
                ))
            }
            ToolName::ArchiveEmail => {
                let path = emails.current_file().ok_or_else(|| {
                    Error::InvalidInput("no current file to archive".to_string())
                })?;
                Ok(ToolOutput::ArchiveEmail(
                    builtins::archive_email(path, &self.paths.archive).await?,
                ))
            }
        }
    }
}

#[async_trait::async_trait]
impl ToolExecutor for FsToolExecutor {
    async fn execute(&self, tool: ToolName, state: &AgentState) -> triage_core::Result<ToolOutput> {
        debug!(tool = %tool, "Running filesystem tool");
        self.dispatch(tool, state)
            .await
            .map_err(|e| triage_core::Error::external(tool, e))
    }
}
