//! Skill definitions

use triage_core::SkillName;

const ANALYZE_AND_PLAN_TEMPLATE: &str = include_str!("../templates/analyze_and_plan.md");
const ANALYZE_EMAIL_TEMPLATE: &str = include_str!("../templates/analyze_email.md");

/// Prompt and description for one skill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDefinition {
    /// Skill identifier
    pub name: SkillName,
    /// Prompt template with `{{variable}}` placeholders
    pub template: String,
    /// What the skill does
    pub description: String,
}

impl SkillDefinition {
    /// Create a definition
    #[must_use]
    pub fn new(
        name: SkillName,
        template: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name,
            template: template.into(),
            description: description.into(),
        }
    }

    /// The built-in definition for a skill
    #[must_use]
    pub fn builtin(name: SkillName) -> Self {
        match name {
            SkillName::AnalyzeAndPlan => Self::new(
                name,
                ANALYZE_AND_PLAN_TEMPLATE,
                "Reason about the goal and history, then choose the next workflow stage",
            ),
            SkillName::AnalyzeEmail => Self::new(
                name,
                ANALYZE_EMAIL_TEMPLATE,
                "Extract topic, category, contact data, urgency, sentiment and a summary from an email",
            ),
        }
    }

    /// Built-in definitions for every skill
    #[must_use]
    pub fn all() -> Vec<Self> {
        SkillName::ALL.into_iter().map(Self::builtin).collect()
    }

    /// Override the prompt template
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }
}
