//! Configuration types

use serde::{Deserialize, Serialize};
use std::time::Duration;
use triage_core::AgentConfig;
use triage_skills::OllamaConfig;
use triage_tools::ToolPaths;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub agent: AgentConfig,
    pub paths: ToolPaths,
    pub llm: LlmConfig,
    #[serde(default)]
    pub cycle: CycleConfig,
}

/// Ollama connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    300
}

impl LlmConfig {
    /// Settings for the skill executor
    pub fn to_ollama(&self) -> OllamaConfig {
        OllamaConfig::new()
            .with_base_url(&self.base_url)
            .with_model(&self.model)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

/// Cyclic mode settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_interval_secs() -> u64 {
    60
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_secs: default_interval_secs(),
        }
    }
}
