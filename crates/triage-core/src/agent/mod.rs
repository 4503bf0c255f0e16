//! Agent - the bounded run loop
//!
//! # Module Structure
//!
//! - `config`: `AgentConfig`
//! - `core`: `Agent` struct and builder methods
//! - `process`: the run loop
//! - `types`: `AgentResult` and `RunOutcome`

mod config;
mod core;
mod process;
mod types;


pub use config::{AgentConfig, DEFAULT_MAX_STEPS};
pub use self::core::Agent;
pub use process::EMAIL_CYCLE_GOAL;
pub use types::{AgentResult, RunOutcome};
