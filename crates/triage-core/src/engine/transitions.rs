//! Transition table
//!
//! Static mapping from workflow stage to the default action the coordinator
//! requests in that stage.

use crate::error::{Error, Result};
use crate::skills::SkillName;
use crate::tools::ToolName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::types::{ActionType, WorkflowStage};

/// Skill or tool named by a transition rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ActionTarget {
    /// An AI-backed skill
    Skill(SkillName),
    /// A deterministic tool
    Tool(ToolName),
}

/// Default action for one stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRule {
    /// Action category
    pub action_type: ActionType,
    /// Skill or tool to invoke; empty for terminal actions
    pub target: Option<ActionTarget>,
    /// Why this action is taken
    pub reason: String,
}

impl TransitionRule {
    /// Create a rule from its parts
    #[must_use]
    pub fn new(
        action_type: ActionType,
        target: Option<ActionTarget>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            action_type,
            target,
            reason: reason.into(),
        }
    }

    /// Invoke a skill
    #[must_use]
    pub fn skill(skill: SkillName, reason: impl Into<String>) -> Self {
        Self::new(ActionType::LlmSkill, Some(ActionTarget::Skill(skill)), reason)
    }

    /// Invoke a tool
    #[must_use]
    pub fn tool(tool: ToolName, reason: impl Into<String>) -> Self {
        Self::new(ActionType::Tool, Some(ActionTarget::Tool(tool)), reason)
    }

    /// Finish the workflow
    #[must_use]
    pub fn complete(reason: impl Into<String>) -> Self {
        Self::new(ActionType::Complete, None, reason)
    }

    /// Stop without doing anything
    #[must_use]
    pub fn noop(reason: impl Into<String>) -> Self {
        Self::new(ActionType::Noop, None, reason)
    }
}

/// Stage → default action mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    rules: BTreeMap<WorkflowStage, TransitionRule>,
}

impl TransitionTable {
    /// Create an empty table
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// The table for the standard correspondence workflow
    #[must_use]
    pub fn standard() -> Self {
        Self::empty()
            .with_rule(
                WorkflowStage::Initial,
                TransitionRule::tool(
                    ToolName::HelloWorld,
                    "Analyzing the user query and planning next steps",
                ),
            )
            .with_rule(
                WorkflowStage::Coordinator,
                TransitionRule::skill(
                    SkillName::AnalyzeAndPlan,
                    "Coordinating the next actions based on the current state",
                ),
            )
            .with_rule(
                WorkflowStage::Completed,
                TransitionRule::complete("Workflow completed successfully"),
            )
            .with_rule(
                WorkflowStage::CheckInbox,
                TransitionRule::tool(ToolName::CheckInbox, "Checking inbox folder for new emails"),
            )
            .with_rule(
                WorkflowStage::AnalyzeEmail,
                TransitionRule::skill(
                    SkillName::AnalyzeEmail,
                    "Analyzing email content and extracting structured data",
                ),
            )
            .with_rule(
                WorkflowStage::SaveToExcel,
                TransitionRule::tool(ToolName::SaveToReport, "Saving email analysis to the report"),
            )
            .with_rule(
                WorkflowStage::ArchiveEmail,
                TransitionRule::tool(
                    ToolName::ArchiveEmail,
                    "Moving processed email to archive folder",
                ),
            )
            .with_rule(
                WorkflowStage::CheckNextEmail,
                TransitionRule::tool(
                    ToolName::CheckInbox,
                    "Checking if there are more emails to process",
                ),
            )
    }

    /// Add or replace the rule for a stage
    #[must_use]
    pub fn with_rule(mut self, stage: WorkflowStage, rule: TransitionRule) -> Self {
        self.rules.insert(stage, rule);
        self
    }

    /// Remove the rule for a stage
    #[must_use]
    pub fn without(mut self, stage: WorkflowStage) -> Self {
        self.rules.remove(&stage);
        self
    }

    /// Look up the rule for a stage
    pub fn lookup(&self, stage: WorkflowStage) -> Result<&TransitionRule> {
        self.rules
            .get(&stage)
            .ok_or_else(|| Error::Configuration(format!("no transition rule for stage {stage}")))
    }

    /// Stages with a declared rule
    pub fn stages(&self) -> impl Iterator<Item = WorkflowStage> + '_ {
        self.rules.keys().copied()
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::standard()
    }
}
