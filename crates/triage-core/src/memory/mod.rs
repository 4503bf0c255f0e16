//! Memory - the agent state tree and its reducers
//!
//! - `models`: state partitions (`AgentState`, `WorkflowMemory`, ...)
//! - `builder`: initial state construction
//! - `reducers`: skill/tool result reducers

mod builder;
mod models;
mod reducers;


pub use builder::{create_initial_state, AgentStateBuilder};
pub use models::{
    AgentState, ConstitutionalMemory, EmailAnalysisResult, EmailProcessingState, EpisodicMemory,
    ProceduralMemory, ResourceMemory, SemanticMemory, WorkflowMemory, WorkflowTransition,
    WorkingMemory,
};
pub use reducers::{update_state_from_skill, update_state_from_tool};
