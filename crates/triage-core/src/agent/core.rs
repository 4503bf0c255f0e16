//! Agent core structure
//!
//! Contains the `Agent` struct and its builder methods.

use crate::engine::{ActionCoordinator, AgentActionCoordinator};
use crate::skills::SkillExecutor;
use crate::tools::ToolExecutor;
use std::sync::Arc;

use super::config::AgentConfig;

/// High-level entry point that drives coordinator, skills and tools
pub struct Agent {
    pub(crate) skills: Arc<dyn SkillExecutor>,
    pub(crate) tools: Arc<dyn ToolExecutor>,
    pub(crate) coordinator: Arc<dyn ActionCoordinator>,
    pub(crate) config: AgentConfig,
}

impl Agent {
    /// Create an agent over the standard transition table
    #[must_use]
    pub fn new(
        skills: Arc<dyn SkillExecutor>,
        tools: Arc<dyn ToolExecutor>,
        config: AgentConfig,
    ) -> Self {
        Self {
            skills,
            tools,
            coordinator: Arc::new(AgentActionCoordinator::new()),
            config,
        }
    }

    /// Replace the coordinator
    #[must_use]
    pub fn with_coordinator(mut self, coordinator: Arc<dyn ActionCoordinator>) -> Self {
        self.coordinator = coordinator;
        self
    }

    /// Get the configuration
    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}
