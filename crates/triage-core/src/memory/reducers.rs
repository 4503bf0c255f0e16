//! State reducers
//!
//! Folds skill and tool outputs back into the state tree. Every reducer takes
//! the current state by reference and returns a new value; the input is never
//! modified. Each reducer picks the next stage itself through
//! [`WorkflowMemory::record_transition`](super::WorkflowMemory::record_transition).

use crate::engine::WorkflowStage;
use crate::error::{Error, Result};
use crate::skills::{AnalyzeAndPlanSkillOutput, AnalyzeEmailSkillOutput, SkillName, SkillOutput};
use crate::tools::{
    ArchiveEmailResponse, CheckInboxResponse, HelloWorldResponse, ReadEmailResponse,
    SaveToReportResponse, ToolName, ToolOutput,
};
use chrono::Utc;
use tracing::debug;

use super::models::{AgentState, EmailAnalysisResult};

/// Route a structured skill output to its reducer
pub fn update_state_from_skill(
    state: &AgentState,
    skill: SkillName,
    output: &SkillOutput,
) -> Result<AgentState> {
    debug!(skill = %skill, stage = %state.stage(), "Applying skill result");
    match (skill, output) {
        (SkillName::AnalyzeAndPlan, SkillOutput::AnalyzeAndPlan(out)) => {
            Ok(skill_analyze_and_plan(state, out))
        }
        (SkillName::AnalyzeEmail, SkillOutput::AnalyzeEmail(out)) => {
            skill_analyze_email(state, out)
        }
        (skill, output) => Err(Error::Configuration(format!(
            "no handler registered for skill {} with {} output",
            skill,
            output.skill()
        ))),
    }
}

/// Route a structured tool output to its reducer
pub fn update_state_from_tool(
    state: &AgentState,
    tool: ToolName,
    output: &ToolOutput,
) -> Result<AgentState> {
    debug!(tool = %tool, stage = %state.stage(), "Applying tool result");
    match (tool, output) {
        (ToolName::HelloWorld, ToolOutput::HelloWorld(out)) => Ok(tool_hello_world(state, out)),
        (ToolName::CheckInbox, ToolOutput::CheckInbox(out)) => Ok(tool_check_inbox(state, out)),
        (ToolName::ReadEmail, ToolOutput::ReadEmail(out)) => Ok(tool_read_email(state, out)),
        (ToolName::SaveToReport, ToolOutput::SaveToReport(out)) => {
            Ok(tool_save_to_report(state, out))
        }
        (ToolName::ArchiveEmail, ToolOutput::ArchiveEmail(out)) => tool_archive_email(state, out),
        (tool, output) => Err(Error::Configuration(format!(
            "no handler registered for tool {} with {} output",
            tool,
            output.tool()
        ))),
    }
}

/// The next stage comes from the skill itself, not from the transition table.
fn skill_analyze_and_plan(state: &AgentState, output: &AnalyzeAndPlanSkillOutput) -> AgentState {
    let mut next = state.clone();
    next.workflow
        .record_transition(output.next_stage, output.chain_of_thought.as_str());
    next
}

fn skill_analyze_email(state: &AgentState, output: &AnalyzeEmailSkillOutput) -> Result<AgentState> {
    let source_file = state
        .working
        .email_processing
        .current_file()
        .ok_or_else(|| Error::InvariantViolation("no current file to analyze".to_string()))?
        .to_path_buf();

    let analysis = EmailAnalysisResult {
        main_topic: output.main_topic.clone(),
        business_category: output.business_category.clone(),
        contact_data: output.contact_data.clone(),
        urgency: output.urgency,
        sentiment: output.sentiment,
        summary: output.summary.clone(),
        event_date: Utc::now(),
        source_file,
    };

    let mut next = state.clone();
    debug!(
        source = %analysis.source_file.display(),
        urgency = %analysis.urgency,
        sentiment = %analysis.sentiment,
        "Email classified"
    );
    next.working.email_processing.set_current_analysis(analysis);
    next.workflow
        .record_transition(WorkflowStage::SaveToExcel, "Email analysis completed");
    Ok(next)
}

fn tool_hello_world(state: &AgentState, _output: &HelloWorldResponse) -> AgentState {
    let mut next = state.clone();
    next.workflow.record_transition(
        WorkflowStage::Coordinator,
        "Initial tool execution completed.",
    );
    next
}

fn tool_check_inbox(state: &AgentState, output: &CheckInboxResponse) -> AgentState {
    let mut next = state.clone();

    if state.stage() == WorkflowStage::CheckNextEmail {
        // Re-check against the queue from the fresh scan; the output is not consulted.
        let emails = &next.working.email_processing;
        if emails.has_more_files() {
            let reason = format!(
                "Processing next email ({}/{})",
                emails.current_file_index() + 1,
                emails.inbox_files().len()
            );
            next.workflow
                .record_transition(WorkflowStage::AnalyzeEmail, reason);
        } else {
            let reason = format!("All {} emails processed", emails.processed_count());
            next.workflow.record_transition(WorkflowStage::Completed, reason);
        }
        return next;
    }

    next.working
        .email_processing
        .load_inbox(output.files.clone());

    if output.count > 0 {
        next.workflow.record_transition(
            WorkflowStage::AnalyzeEmail,
            format!("Found {} email(s) to process", output.count),
        );
    } else {
        next.workflow
            .record_transition(WorkflowStage::Completed, "No emails found in inbox");
    }
    next
}

fn tool_read_email(state: &AgentState, output: &ReadEmailResponse) -> AgentState {
    let mut next = state.clone();
    next.working
        .email_processing
        .set_current_content(output.content.as_str());
    next.workflow.record_transition(
        WorkflowStage::AnalyzeEmail,
        format!("Loaded email: {}", output.file_name),
    );
    next
}

fn tool_save_to_report(state: &AgentState, _output: &SaveToReportResponse) -> AgentState {
    let mut next = state.clone();
    next.workflow
        .record_transition(WorkflowStage::ArchiveEmail, "Analysis saved to report");
    next
}

fn tool_archive_email(state: &AgentState, _output: &ArchiveEmailResponse) -> Result<AgentState> {
    let mut next = state.clone();
    next.working.email_processing.complete_current_file()?;
    next.workflow
        .record_transition(WorkflowStage::CheckNextEmail, "Email archived successfully");
    Ok(next)
}
