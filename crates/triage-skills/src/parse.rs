//! Model reply parsing
//!
//! Replies are expected to be one JSON object. Stage and level names are
//! matched case-insensitively; a surrounding markdown code fence is ignored.

use crate::error::{Error, Result};
use serde::Deserialize;
use triage_core::{
    AnalyzeAndPlanSkillOutput, AnalyzeEmailSkillOutput, SentimentLevel, SkillName, SkillOutput,
    UrgencyLevel, WorkflowStage,
};

#[derive(Debug, Deserialize)]
struct PlanReply {
    #[serde(default)]
    chain_of_thought: String,
    #[serde(default)]
    next_stage: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EmailReply {
    main_topic: String,
    business_category: String,
    #[serde(default)]
    contact_data: String,
    urgency: String,
    sentiment: String,
    summary: String,
}

/// Parse a model reply into the output of the requested skill
pub fn parse_reply(skill: SkillName, reply: &str) -> Result<SkillOutput> {
    let body = strip_code_fence(reply);

    match skill {
        SkillName::AnalyzeAndPlan => {
            let raw: PlanReply = from_json(body)?;
            let next_stage = match raw.next_stage.as_deref() {
                Some(stage) if !stage.trim().is_empty() => stage
                    .parse::<WorkflowStage>()
                    .map_err(|e| Error::InvalidResponse(e.to_string()))?,
                _ => WorkflowStage::Coordinator,
            };
            Ok(SkillOutput::AnalyzeAndPlan(AnalyzeAndPlanSkillOutput {
                chain_of_thought: raw.chain_of_thought,
                next_stage,
            }))
        }
        SkillName::AnalyzeEmail => {
            let raw: EmailReply = from_json(body)?;
            let urgency = raw
                .urgency
                .parse::<UrgencyLevel>()
                .map_err(|e| Error::InvalidResponse(e.to_string()))?;
            let sentiment = raw
                .sentiment
                .parse::<SentimentLevel>()
                .map_err(|e| Error::InvalidResponse(e.to_string()))?;
            Ok(SkillOutput::AnalyzeEmail(AnalyzeEmailSkillOutput {
                main_topic: raw.main_topic,
                business_category: raw.business_category,
                contact_data: raw.contact_data,
                urgency,
                sentiment,
                summary: raw.summary,
            }))
        }
    }
}

fn from_json<T: for<'de> Deserialize<'de>>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| Error::InvalidResponse(format!("{e}: {body}")))
}

fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // skip an optional language tag such as ```json
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
