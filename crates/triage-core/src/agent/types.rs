//! Run results

use crate::memory::AgentState;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// The coordinator returned a complete decision
    Completed,
    /// The coordinator returned a no-op decision
    NoOp,
    /// The step ceiling was hit before a terminal decision
    LimitReached,
}

impl RunOutcome {
    /// Returns the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::NoOp => "no_op",
            Self::LimitReached => "limit_reached",
        }
    }
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Return value from a full agent run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResult {
    /// Run identifier, also attached to log lines
    pub run_id: Uuid,
    /// Last committed state
    pub state: AgentState,
    /// Steps taken, including the one that produced the terminal decision
    pub steps_executed: usize,
    /// How the run ended
    pub outcome: RunOutcome,
}

impl AgentResult {
    /// Number of emails archived during the run
    #[must_use]
    pub fn processed_count(&self) -> usize {
        self.state.working.email_processing.processed_count()
    }

    /// One-line human summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Run {} {} after {} step(s) at stage {}: {} email(s) processed",
            self.run_id,
            self.outcome,
            self.steps_executed,
            self.state.stage(),
            self.processed_count()
        )
    }
}
