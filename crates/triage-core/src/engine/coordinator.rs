//! Coordinator - maps the current state to the next action

use crate::error::Result;
use crate::memory::AgentState;

use super::decision::Decision;
use super::transitions::TransitionTable;

/// Decides what the run loop should do next
#[cfg_attr(test, mockall::automock)]
pub trait ActionCoordinator: Send + Sync {
    /// Produce the decision for the given state
    fn next_action(&self, state: &AgentState) -> Result<Decision>;
}

/// Table-driven coordinator.
///
/// Reads only the current stage, so equal stages always produce equal
/// decisions.
#[derive(Debug, Clone, Default)]
pub struct AgentActionCoordinator {
    table: TransitionTable,
}

impl AgentActionCoordinator {
    /// Create a coordinator over the standard table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a coordinator over a custom table
    #[must_use]
    pub fn with_table(table: TransitionTable) -> Self {
        Self { table }
    }

    /// The table this coordinator consults
    #[must_use]
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }
}

impl ActionCoordinator for AgentActionCoordinator {
    fn next_action(&self, state: &AgentState) -> Result<Decision> {
        let rule = self.table.lookup(state.stage())?;
        Ok(Decision::from(rule))
    }
}
