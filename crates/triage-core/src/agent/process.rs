//! Agent run loop
//!
//! Bounded iteration: coordinator → executor → reducer. Each step builds the
//! next state completely before it replaces the current one, so a failing
//! step leaves nothing half-applied.

use crate::engine::{ActionType, Decision, WorkflowStage};
use crate::error::{Error, Result};
use crate::memory::{
    update_state_from_skill, update_state_from_tool, AgentState, AgentStateBuilder,
    WorkflowMemory,
};
use crate::skills::{EmailContext, SkillContext, SkillName};
use crate::tools::{ToolName, ToolOutput};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::core::Agent;
use super::types::{AgentResult, RunOutcome};

/// Goal used for inbox processing cycles
pub const EMAIL_CYCLE_GOAL: &str = "Process emails from inbox folder";

impl Agent {
    /// Run the open-ended workflow for a goal, starting at `INITIAL`
    pub async fn run(&self, goal: &str) -> Result<AgentResult> {
        let state = AgentStateBuilder::new().goal(goal).build()?;
        self.run_from(state).await
    }

    /// Run one inbox processing cycle, starting at `CHECK_INBOX`
    pub async fn run_email_cycle(&self) -> Result<AgentResult> {
        let workflow = WorkflowMemory::starting_at(EMAIL_CYCLE_GOAL, WorkflowStage::CheckInbox);
        let state = AgentStateBuilder::new().workflow(workflow).build()?;
        self.run_from(state).await
    }

    /// Drive the loop from an arbitrary state until a terminal decision or the step ceiling
    pub async fn run_from(&self, initial: AgentState) -> Result<AgentResult> {
        let run_id = Uuid::new_v4();
        let max_steps = self.config.max_steps;

        info!(
            run_id = %run_id,
            goal = %initial.workflow.goal(),
            stage = %initial.stage(),
            max_steps,
            "Starting agent run"
        );

        let mut state = initial;
        let mut steps_executed = 0;

        for step in 0..max_steps {
            steps_executed = step + 1;
            let decision = self.coordinator.next_action(&state)?;
            debug!(run_id = %run_id, step = steps_executed, decision = %decision, "Coordinator decision");

            if decision.action_type.is_terminal() {
                let outcome = if decision.action_type == ActionType::Noop {
                    RunOutcome::NoOp
                } else {
                    RunOutcome::Completed
                };
                info!(
                    run_id = %run_id,
                    steps = steps_executed,
                    outcome = %outcome,
                    reason = %decision.reason,
                    "Run finished"
                );
                return Ok(finish(run_id, state, steps_executed, outcome));
            }

            state = self.execute_step(&state, &decision).await?;
        }

        warn!(
            run_id = %run_id,
            max_steps,
            stage = %state.stage(),
            "Reached step limit before completion. Consider increasing max_steps."
        );
        Ok(finish(run_id, state, steps_executed, RunOutcome::LimitReached))
    }

    /// Dispatch one non-terminal decision and return the next state
    async fn execute_step(&self, state: &AgentState, decision: &Decision) -> Result<AgentState> {
        match (decision.action_type, decision.skill, decision.tool) {
            (ActionType::LlmSkill, Some(skill), None) => self.execute_skill(state, skill).await,
            (ActionType::Tool, None, Some(tool)) => self.execute_tool(state, tool).await,
            _ => Err(Error::UnhandledDecision(decision.to_string())),
        }
    }

    async fn execute_skill(&self, state: &AgentState, skill: SkillName) -> Result<AgentState> {
        let (prepared, email) = self.prepare_skill_input(state).await?;
        let context = SkillContext {
            state: &prepared,
            email,
        };

        info!(skill = %skill, stage = %prepared.stage(), "Invoking LLM skill");
        let output = self.skills.execute(skill, &context).await?;
        debug!(skill = %skill, output = ?output, "LLM skill output");

        update_state_from_skill(&prepared, skill, &output)
    }

    async fn execute_tool(&self, state: &AgentState, tool: ToolName) -> Result<AgentState> {
        info!(tool = %tool, stage = %state.stage(), "Executing tool");
        let output = self.tools.execute(tool, state).await?;
        debug!(tool = %tool, output = ?output, "Tool output");

        update_state_from_tool(state, tool, &output)
    }

    /// Load the current email for the analysis stage.
    ///
    /// Fails before any skill call when the queue has no current file.
    /// When the content is not cached yet, the read-email tool runs first and
    /// its result is folded in; the returned state is only committed by the
    /// caller once the skill step as a whole succeeds.
    async fn prepare_skill_input(
        &self,
        state: &AgentState,
    ) -> Result<(AgentState, Option<EmailContext>)> {
        if state.stage() != WorkflowStage::AnalyzeEmail {
            return Ok((state.clone(), None));
        }

        let emails = &state.working.email_processing;
        let Some(current_file) = emails.current_file() else {
            return Err(Error::InvariantViolation(
                "no current file to analyze".to_string(),
            ));
        };

        if let Some(content) = emails.current_file_content() {
            let file_name = current_file
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let email = EmailContext {
                file_name,
                content: content.to_string(),
            };
            return Ok((state.clone(), Some(email)));
        }

        debug!(path = %current_file.display(), "Email content not cached, reading file");
        let output = self.tools.execute(ToolName::ReadEmail, state).await?;
        let email = match &output {
            ToolOutput::ReadEmail(read) => EmailContext {
                file_name: read.file_name.clone(),
                content: read.content.clone(),
            },
            other => {
                return Err(Error::Configuration(format!(
                    "read_email returned {} output",
                    other.tool()
                )))
            }
        };
        let prepared = update_state_from_tool(state, ToolName::ReadEmail, &output)?;
        Ok((prepared, Some(email)))
    }
}

fn finish(
    run_id: Uuid,
    state: AgentState,
    steps_executed: usize,
    outcome: RunOutcome,
) -> AgentResult {
    AgentResult {
        run_id,
        state,
        steps_executed,
        outcome,
    }
}
