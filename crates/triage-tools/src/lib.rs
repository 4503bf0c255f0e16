//! Triage Tools - Filesystem tools for the inbox triage agent
//!
//! This crate implements the tool side of the agent:
//! - Built-in operations on the inbox, archive and report files
//! - `FsToolExecutor`, which dispatches `ToolName`s to those operations

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod builtins;
pub mod error;
pub mod executor;


pub use error::{Error, Result};
pub use executor::{FsToolExecutor, ToolPaths};
