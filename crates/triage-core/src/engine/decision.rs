//! Coordinator decisions

use crate::skills::SkillName;
use crate::tools::ToolName;
use serde::{Deserialize, Serialize};

use super::transitions::{ActionTarget, TransitionRule};
use super::types::ActionType;

/// Instruction produced by the coordinator for one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Action category
    pub action_type: ActionType,
    /// Skill to invoke, for skill actions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<SkillName>,
    /// Tool to invoke, for tool actions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<ToolName>,
    /// Why this action was chosen
    pub reason: String,
}

impl Decision {
    /// Invoke a skill
    #[must_use]
    pub fn skill(skill: SkillName, reason: impl Into<String>) -> Self {
        Self {
            action_type: ActionType::LlmSkill,
            skill: Some(skill),
            tool: None,
            reason: reason.into(),
        }
    }

    /// Invoke a tool
    #[must_use]
    pub fn tool(tool: ToolName, reason: impl Into<String>) -> Self {
        Self {
            action_type: ActionType::Tool,
            skill: None,
            tool: Some(tool),
            reason: reason.into(),
        }
    }

    /// Finish the workflow
    #[must_use]
    pub fn complete(reason: impl Into<String>) -> Self {
        Self {
            action_type: ActionType::Complete,
            skill: None,
            tool: None,
            reason: reason.into(),
        }
    }

    /// Stop without doing anything
    #[must_use]
    pub fn noop(reason: impl Into<String>) -> Self {
        Self {
            action_type: ActionType::Noop,
            skill: None,
            tool: None,
            reason: reason.into(),
        }
    }
}

impl From<&TransitionRule> for Decision {
    fn from(rule: &TransitionRule) -> Self {
        let (skill, tool) = match rule.target {
            Some(ActionTarget::Skill(skill)) => (Some(skill), None),
            Some(ActionTarget::Tool(tool)) => (None, Some(tool)),
            None => (None, None),
        };
        Self {
            action_type: rule.action_type,
            skill,
            tool,
            reason: rule.reason.clone(),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.action_type)?;
        if let Some(skill) = self.skill {
            write!(f, " skill={skill}")?;
        }
        if let Some(tool) = self.tool {
            write!(f, " tool={tool}")?;
        }
        write!(f, " ({})", self.reason)
    }
}
