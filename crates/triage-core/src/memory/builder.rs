//! Initial state construction

use crate::error::{Error, Result};

use super::models::{
    AgentState, ConstitutionalMemory, EpisodicMemory, ProceduralMemory, ResourceMemory,
    SemanticMemory, WorkflowMemory, WorkingMemory,
};

/// Builder for a fully-populated state tree.
///
/// Either a goal or a complete [`WorkflowMemory`] is required; when both are
/// given the workflow wins. Partitions left unset start empty.
#[derive(Debug, Clone, Default)]
pub struct AgentStateBuilder {
    goal: Option<String>,
    workflow: Option<WorkflowMemory>,
    core: Option<ConstitutionalMemory>,
    working: Option<WorkingMemory>,
    episodic: Option<EpisodicMemory>,
    semantic: Option<SemanticMemory>,
    procedural: Option<ProceduralMemory>,
    resource: Option<ResourceMemory>,
}

impl AgentStateBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the goal for a fresh workflow starting at `INITIAL`
    #[must_use]
    pub fn goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = Some(goal.into());
        self
    }

    /// Use an existing workflow memory
    #[must_use]
    pub fn workflow(mut self, workflow: WorkflowMemory) -> Self {
        self.workflow = Some(workflow);
        self
    }

    /// Set the guardrail partition
    #[must_use]
    pub fn core(mut self, core: ConstitutionalMemory) -> Self {
        self.core = Some(core);
        self
    }

    /// Set the working memory
    #[must_use]
    pub fn working(mut self, working: WorkingMemory) -> Self {
        self.working = Some(working);
        self
    }

    /// Set the episodic partition
    #[must_use]
    pub fn episodic(mut self, episodic: EpisodicMemory) -> Self {
        self.episodic = Some(episodic);
        self
    }

    /// Set the semantic partition
    #[must_use]
    pub fn semantic(mut self, semantic: SemanticMemory) -> Self {
        self.semantic = Some(semantic);
        self
    }

    /// Set the procedural partition
    #[must_use]
    pub fn procedural(mut self, procedural: ProceduralMemory) -> Self {
        self.procedural = Some(procedural);
        self
    }

    /// Set the resource partition
    #[must_use]
    pub fn resource(mut self, resource: ResourceMemory) -> Self {
        self.resource = Some(resource);
        self
    }

    /// Build the state
    pub fn build(self) -> Result<AgentState> {
        let workflow = match (self.workflow, self.goal) {
            (Some(workflow), _) => workflow,
            (None, Some(goal)) => WorkflowMemory::new(goal),
            (None, None) => {
                return Err(Error::InvalidInitialState(
                    "either goal or workflow must be provided".to_string(),
                ))
            }
        };

        Ok(AgentState {
            core: self.core.unwrap_or_default(),
            working: self.working.unwrap_or_default(),
            workflow,
            episodic: self.episodic.unwrap_or_default(),
            semantic: self.semantic.unwrap_or_default(),
            procedural: self.procedural.unwrap_or_default(),
            resource: self.resource.unwrap_or_default(),
        })
    }
}

/// Create a state for a new workflow with the given goal
pub fn create_initial_state(goal: impl Into<String>) -> Result<AgentState> {
    AgentStateBuilder::new().goal(goal).build()
}
