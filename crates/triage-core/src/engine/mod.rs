//! Engine - stages, decisions and the coordinator
//!
//! # Module Structure
//!
//! - `types`: `WorkflowStage` and `ActionType`
//! - `transitions`: the stage → action `TransitionTable`
//! - `decision`: the `Decision` value handed to the run loop
//! - `coordinator`: `ActionCoordinator` and its table-driven implementation

mod coordinator;
mod decision;
mod transitions;
mod types;


pub use coordinator::{ActionCoordinator, AgentActionCoordinator};
#[cfg(test)]
pub use coordinator::MockActionCoordinator;
pub use decision::Decision;
pub use transitions::{ActionTarget, TransitionRule, TransitionTable};
pub use types::{ActionType, WorkflowStage};
