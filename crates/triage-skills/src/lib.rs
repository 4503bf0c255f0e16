//! Triage Skills - LLM-backed skills for the inbox triage agent
//!
//! This crate implements the skill side of the agent:
//! - Definitions: one prompt template per `SkillName`
//! - Templates: `{{variable}}` interpolation from the skill context
//! - Parsing: model replies into typed skill outputs
//! - Ollama: a `SkillExecutor` backed by a local Ollama server

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod definition;
pub mod error;
pub mod ollama;
pub mod parse;
pub mod template;

pub use definition::SkillDefinition;
pub use error::{Error, Result};
pub use ollama::{OllamaConfig, OllamaSkillExecutor};
pub use parse::parse_reply;
pub use template::render;
