//! Skills - AI-backed operations
//!
//! This module defines the closed set of skills the coordinator can request,
//! their structured outputs, and the `SkillExecutor` seam implemented by the
//! AI collaborator.

use crate::engine::WorkflowStage;
use crate::error::{Error, Result};
use crate::memory::AgentState;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

/// Names of available skills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillName {
    /// Open-ended reasoning that picks the next stage
    AnalyzeAndPlan,
    /// Classify and summarize a single email
    AnalyzeEmail,
}

impl SkillName {
    /// All declared skills
    pub const ALL: [SkillName; 2] = [Self::AnalyzeAndPlan, Self::AnalyzeEmail];

    /// Returns the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AnalyzeAndPlan => "analyze_and_plan",
            Self::AnalyzeEmail => "analyze_email",
        }
    }
}

impl std::fmt::Display for SkillName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SkillName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|skill| skill.as_str() == s.trim())
            .ok_or_else(|| Error::Configuration(format!("no skill registered as '{s}'")))
    }
}

/// Urgency classification for emails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UrgencyLevel {
    /// Can wait
    #[serde(alias = "low", alias = "LOW")]
    Low,
    /// Should be handled soon
    #[serde(alias = "medium", alias = "MEDIUM")]
    Medium,
    /// Needs attention now
    #[serde(alias = "high", alias = "HIGH")]
    High,
}

impl UrgencyLevel {
    /// Returns the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UrgencyLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(Error::Configuration(format!(
                "unknown urgency level: {other}"
            ))),
        }
    }
}

/// Sentiment classification for emails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLevel {
    /// Friendly or satisfied tone
    #[serde(alias = "positive", alias = "POSITIVE")]
    Positive,
    /// Matter-of-fact tone
    #[serde(alias = "neutral", alias = "NEUTRAL")]
    Neutral,
    /// Frustrated or angry tone
    #[serde(alias = "negative", alias = "NEGATIVE")]
    Negative,
}

impl SentimentLevel {
    /// Returns the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for SentimentLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SentimentLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            other => Err(Error::Configuration(format!(
                "unknown sentiment level: {other}"
            ))),
        }
    }
}

fn default_next_stage() -> WorkflowStage {
    WorkflowStage::Coordinator
}

/// Structured fields returned by the analyze-and-plan skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeAndPlanSkillOutput {
    /// Reasoning about the goal and the current context
    #[serde(default)]
    pub chain_of_thought: String,
    /// Recommended next workflow stage
    #[serde(default = "default_next_stage")]
    pub next_stage: WorkflowStage,
}

impl Default for AnalyzeAndPlanSkillOutput {
    fn default() -> Self {
        Self {
            chain_of_thought: String::new(),
            next_stage: default_next_stage(),
        }
    }
}

/// Structured output from the email analysis skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeEmailSkillOutput {
    /// Short label for the subject (e.g. "Login Error", "Quote Request")
    pub main_topic: String,
    /// Department assignment (Sales, HR, Tech Support, Accounting, ...)
    pub business_category: String,
    /// Email addresses or phone numbers found in the body or signature
    pub contact_data: String,
    /// Urgency assessment
    pub urgency: UrgencyLevel,
    /// Emotional tone
    pub sentiment: SentimentLevel,
    /// One-sentence abstract for management review
    pub summary: String,
}

/// Output of a skill execution, tagged by the skill that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "skill", rename_all = "snake_case")]
pub enum SkillOutput {
    /// Output of [`SkillName::AnalyzeAndPlan`]
    AnalyzeAndPlan(AnalyzeAndPlanSkillOutput),
    /// Output of [`SkillName::AnalyzeEmail`]
    AnalyzeEmail(AnalyzeEmailSkillOutput),
}

impl SkillOutput {
    /// The skill whose output shape this is
    #[must_use]
    pub fn skill(&self) -> SkillName {
        match self {
            Self::AnalyzeAndPlan(_) => SkillName::AnalyzeAndPlan,
            Self::AnalyzeEmail(_) => SkillName::AnalyzeEmail,
        }
    }
}

/// The email a skill is asked to analyze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContext {
    /// File name without directory
    pub file_name: String,
    /// Raw file content
    pub content: String,
}

/// Everything a skill may render into its prompt
#[derive(Debug, Clone)]
pub struct SkillContext<'a> {
    /// Snapshot of the state the decision was made on
    pub state: &'a AgentState,
    /// Current email, present only in the email analysis stage
    pub email: Option<EmailContext>,
}

impl<'a> SkillContext<'a> {
    /// Create a context without email data
    #[must_use]
    pub fn new(state: &'a AgentState) -> Self {
        Self { state, email: None }
    }

    /// Attach the current email
    #[must_use]
    pub fn with_email(mut self, email: EmailContext) -> Self {
        self.email = Some(email);
        self
    }

    /// Flatten the context into template variables
    #[must_use]
    pub fn variables(&self) -> HashMap<String, Value> {
        let workflow = &self.state.workflow;
        let emails = &self.state.working.email_processing;

        let history = workflow
            .history()
            .iter()
            .map(|t| {
                format!(
                    "{} -> {}: {}",
                    t.from_stage,
                    t.to_stage,
                    t.reason.as_deref().unwrap_or("")
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let mut vars = HashMap::new();
        vars.insert("goal".to_string(), Value::String(workflow.goal().to_string()));
        vars.insert(
            "stage".to_string(),
            Value::String(workflow.current_stage().to_string()),
        );
        vars.insert("history".to_string(), Value::String(history));
        vars.insert(
            "processed_count".to_string(),
            Value::from(emails.processed_count()),
        );
        vars.insert(
            "remaining_count".to_string(),
            Value::from(emails.remaining()),
        );

        let (file_name, content) = match &self.email {
            Some(email) => (email.file_name.clone(), email.content.clone()),
            None => (String::new(), String::new()),
        };
        vars.insert("file_name".to_string(), Value::String(file_name));
        vars.insert("email_content".to_string(), Value::String(content));

        vars
    }
}

/// Executes AI-backed skills
#[async_trait::async_trait]
pub trait SkillExecutor: Send + Sync {
    /// Run a skill and return its structured output
    async fn execute(&self, skill: SkillName, context: &SkillContext<'_>) -> Result<SkillOutput>;
}
