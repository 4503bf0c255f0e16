//! Memory models
//!
//! The agent state is a tree of named memory partitions. Only `working` and
//! `workflow` change during a run; the other partitions are carried through
//! untouched.

use crate::engine::WorkflowStage;
use crate::error::{Error, Result};
use crate::skills::{SentimentLevel, UrgencyLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Structured data extracted from one email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAnalysisResult {
    /// Short label for the subject
    pub main_topic: String,
    /// Department assignment
    pub business_category: String,
    /// Extracted email addresses or phone numbers
    pub contact_data: String,
    /// Urgency assessment
    pub urgency: UrgencyLevel,
    /// Emotional tone
    pub sentiment: SentimentLevel,
    /// One-sentence abstract
    pub summary: String,
    /// When the analysis was recorded
    pub event_date: DateTime<Utc>,
    /// Path of the analyzed email
    pub source_file: PathBuf,
}

/// Progress through the inbox for the current cycle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailProcessingState {
    inbox_files: Vec<PathBuf>,
    current_file_index: usize,
    current_file_content: Option<String>,
    current_analysis: Option<EmailAnalysisResult>,
    processed_count: usize,
}

impl EmailProcessingState {
    /// Files found by the last fresh inbox scan
    #[must_use]
    pub fn inbox_files(&self) -> &[PathBuf] {
        &self.inbox_files
    }

    /// Index of the file being processed
    #[must_use]
    pub fn current_file_index(&self) -> usize {
        self.current_file_index
    }

    /// Cached content of the current file
    #[must_use]
    pub fn current_file_content(&self) -> Option<&str> {
        self.current_file_content.as_deref()
    }

    /// Analysis of the current file
    #[must_use]
    pub fn current_analysis(&self) -> Option<&EmailAnalysisResult> {
        self.current_analysis.as_ref()
    }

    /// Emails archived in this cycle
    #[must_use]
    pub fn processed_count(&self) -> usize {
        self.processed_count
    }

    /// Check if there are more files to process
    #[must_use]
    pub fn has_more_files(&self) -> bool {
        self.current_file_index < self.inbox_files.len()
    }

    /// Files not yet processed, including the current one
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.inbox_files.len().saturating_sub(self.current_file_index)
    }

    /// The file under the cursor, if any
    #[must_use]
    pub fn current_file(&self) -> Option<&Path> {
        self.inbox_files
            .get(self.current_file_index)
            .map(PathBuf::as_path)
    }

    /// Replace the queue with a fresh scan and rewind the cursor
    pub fn load_inbox(&mut self, files: Vec<PathBuf>) {
        self.inbox_files = files;
        self.current_file_index = 0;
        self.current_file_content = None;
        self.current_analysis = None;
    }

    /// Cache the content of the current file
    pub fn set_current_content(&mut self, content: impl Into<String>) {
        self.current_file_content = Some(content.into());
    }

    /// Store the analysis of the current file
    pub fn set_current_analysis(&mut self, analysis: EmailAnalysisResult) {
        self.current_analysis = Some(analysis);
    }

    /// Count the current file as processed and move the cursor past it
    pub fn complete_current_file(&mut self) -> Result<()> {
        if !self.has_more_files() {
            return Err(Error::InvariantViolation(format!(
                "cannot advance past the last inbox file (index {} of {})",
                self.current_file_index,
                self.inbox_files.len()
            )));
        }
        self.processed_count += 1;
        self.current_file_index += 1;
        self.current_file_content = None;
        self.current_analysis = None;
        Ok(())
    }
}

/// Guardrail principles the agent must not break
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstitutionalMemory {}

/// Context of the current session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingMemory {
    /// Inbox processing progress
    pub email_processing: EmailProcessingState,
}

/// Record of a workflow stage transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowTransition {
    /// Stage left
    pub from_stage: WorkflowStage,
    /// Stage entered
    pub to_stage: WorkflowStage,
    /// When the transition was recorded
    pub timestamp: DateTime<Utc>,
    /// Why the transition happened
    pub reason: Option<String>,
}

/// The state machine: where the agent is in the business process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowMemory {
    current_stage: WorkflowStage,
    goal: String,
    history: Vec<WorkflowTransition>,
}

impl WorkflowMemory {
    /// Start a workflow at [`WorkflowStage::Initial`]
    #[must_use]
    pub fn new(goal: impl Into<String>) -> Self {
        Self::starting_at(goal, WorkflowStage::Initial)
    }

    /// Start a workflow at an arbitrary stage
    #[must_use]
    pub fn starting_at(goal: impl Into<String>, stage: WorkflowStage) -> Self {
        Self {
            current_stage: stage,
            goal: goal.into(),
            history: Vec::new(),
        }
    }

    /// Current stage
    #[must_use]
    pub fn current_stage(&self) -> WorkflowStage {
        self.current_stage
    }

    /// Goal the workflow was created with
    #[must_use]
    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// Transitions in the order they happened
    #[must_use]
    pub fn history(&self) -> &[WorkflowTransition] {
        &self.history
    }

    /// Move to `to_stage`, appending a history entry if the stage changes.
    ///
    /// Returns whether a transition was recorded. Timestamps never go
    /// backwards relative to the previous entry.
    pub fn record_transition(
        &mut self,
        to_stage: WorkflowStage,
        reason: impl Into<String>,
    ) -> bool {
        if self.current_stage == to_stage {
            return false;
        }

        let now = Utc::now();
        let timestamp = match self.history.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        };
        let reason = reason.into();

        self.history.push(WorkflowTransition {
            from_stage: self.current_stage,
            to_stage,
            timestamp,
            reason: (!reason.is_empty()).then_some(reason),
        });
        self.current_stage = to_stage;
        true
    }
}

/// Interaction history and event logs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodicMemory {}

/// Knowledge base: facts about the world and the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticMemory {}

/// Tool definitions, APIs and manuals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProceduralMemory {}

/// System status, API availability and limits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMemory {}

/// Full memory object available to the engine layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentState {
    /// Guardrails
    pub core: ConstitutionalMemory,
    /// Session context
    pub working: WorkingMemory,
    /// Workflow state machine
    pub workflow: WorkflowMemory,
    /// Event history
    pub episodic: EpisodicMemory,
    /// Knowledge base
    pub semantic: SemanticMemory,
    /// How-to knowledge
    pub procedural: ProceduralMemory,
    /// Resource status
    pub resource: ResourceMemory,
}

impl AgentState {
    /// Shortcut for the current workflow stage
    #[must_use]
    pub fn stage(&self) -> WorkflowStage {
        self.workflow.current_stage()
    }
}
