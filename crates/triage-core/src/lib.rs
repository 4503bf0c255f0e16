//! Triage Core - Workflow Orchestration Engine
//!
//! This crate provides the orchestration core of the inbox triage agent:
//! - Engine: workflow stages, the transition table and the coordinator
//! - Memory: the agent state tree and the reducers that fold skill/tool
//!   results back into it
//! - Agent: the bounded run loop
//! - Skills/Tools: the closed sets of external operations and the executor
//!   traits their collaborators implement

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod agent;
pub mod engine;
pub mod error;
pub mod memory;
pub mod skills;
pub mod tools;

pub use agent::{Agent, AgentConfig, AgentResult, RunOutcome, EMAIL_CYCLE_GOAL};
pub use engine::{
    ActionCoordinator, ActionTarget, ActionType, AgentActionCoordinator, Decision,
    TransitionRule, TransitionTable, WorkflowStage,
};
pub use error::{format_error_for_cli, Error, Result, UserFriendlyError};
pub use memory::{
    create_initial_state, update_state_from_skill, update_state_from_tool, AgentState,
    AgentStateBuilder, EmailAnalysisResult, EmailProcessingState, WorkflowMemory,
    WorkflowTransition, WorkingMemory,
};
pub use skills::{
    AnalyzeAndPlanSkillOutput, AnalyzeEmailSkillOutput, EmailContext, SentimentLevel,
    SkillContext, SkillExecutor, SkillName, SkillOutput, UrgencyLevel,
};
pub use tools::{
    ArchiveEmailResponse, CheckInboxResponse, HelloWorldResponse, ReadEmailResponse,
    SaveToReportResponse, ToolExecutor, ToolName, ToolOutput,
};
