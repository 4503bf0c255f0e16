//! Ollama - Skill executor backed by a local Ollama server
//!
//! Each skill call is one non-streaming `/api/chat` request in JSON mode.
//! The reply content is parsed into the skill's typed output.

use crate::definition::SkillDefinition;
use crate::error::{Error, Result};
use crate::parse::parse_reply;
use crate::template::render;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument};
use triage_core::{SkillContext, SkillExecutor, SkillName, SkillOutput};

/// Default Ollama model
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Default Ollama API URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

const SYSTEM_PROMPT: &str =
    "You are a precise assistant inside an email triage workflow. Reply with JSON only.";

// ============================================================================
// API Types
// ============================================================================

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: Vec<OllamaMessage<'a>>,
    format: &'static str,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct OllamaError {
    error: String,
}

// ============================================================================
// Executor
// ============================================================================

/// Ollama connection settings
#[derive(Debug, Clone, PartialEq)]
pub struct OllamaConfig {
    /// Base URL (default: http://localhost:11434)
    pub base_url: String,
    /// Model used for every skill
    pub model: String,
    /// Request timeout (long, since inference is local)
    pub timeout: Duration,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(300),
        }
    }
}

impl OllamaConfig {
    /// Create a new configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// `SkillExecutor` that prompts an Ollama model
pub struct OllamaSkillExecutor {
    client: Client,
    config: OllamaConfig,
    definitions: HashMap<SkillName, SkillDefinition>,
}

impl OllamaSkillExecutor {
    /// Create an executor with the built-in skill definitions
    pub fn new(config: OllamaConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        let definitions = SkillDefinition::all()
            .into_iter()
            .map(|def| (def.name, def))
            .collect();

        Ok(Self {
            client,
            config,
            definitions,
        })
    }

    /// Replace the definition used for one skill
    #[must_use]
    pub fn with_definition(mut self, definition: SkillDefinition) -> Self {
        self.definitions.insert(definition.name, definition);
        self
    }

    /// Connection settings
    #[must_use]
    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    /// Render the prompt a skill would send for a context
    pub fn render_prompt(&self, skill: SkillName, context: &SkillContext<'_>) -> Result<String> {
        let definition = self
            .definitions
            .get(&skill)
            .ok_or_else(|| Error::Template(format!("no definition for skill {skill}")))?;
        render(&definition.template, &context.variables())
    }

    async fn run_skill(&self, skill: SkillName, context: &SkillContext<'_>) -> Result<SkillOutput> {
        let prompt = self.render_prompt(skill, context)?;
        let reply = self.chat(&prompt).await?;
        debug!(skill = %skill, reply = %reply, "Model reply");
        parse_reply(skill, &reply)
    }

    /// Send one prompt and return the reply content
    async fn chat(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/chat", self.config.base_url);
        let request = OllamaChatRequest {
            model: &self.config.model,
            messages: vec![
                OllamaMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                OllamaMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            format: "json",
            stream: false,
            options: OllamaOptions { temperature: 0.0 },
        };

        debug!(model = %self.config.model, "Sending request to Ollama");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    Error::Network(format!(
                        "Failed to connect to Ollama at {}. Is Ollama running?",
                        self.config.base_url
                    ))
                } else if e.is_timeout() {
                    Error::Timeout(self.config.timeout.as_millis() as u64)
                } else {
                    Error::Network(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !status.is_success() {
            if let Ok(error) = serde_json::from_str::<OllamaError>(&body) {
                return Err(Error::Api(error.error));
            }
            return Err(Error::Api(format!("HTTP {status}")));
        }

        let parsed: OllamaChatResponse = serde_json::from_str(&body)
            .map_err(|e| Error::InvalidResponse(format!("{e}: {body}")))?;
        Ok(parsed.message.content)
    }
}

#[async_trait::async_trait]
impl SkillExecutor for OllamaSkillExecutor {
    #[instrument(skip(self, context), fields(model = %self.config.model))]
    async fn execute(
        &self,
        skill: SkillName,
        context: &SkillContext<'_>,
    ) -> triage_core::Result<SkillOutput> {
        self.run_skill(skill, context)
            .await
            .map_err(|e| triage_core::Error::external(skill, e))
    }
}

#[cfg(test)]
mod tests;
