//! CLI module for Triage
//!
//! Provides commands:
//! - `run`: process the inbox once, or repeatedly with `--cyclic`
//! - `plan`: run the open-ended workflow for a goal
//! - `check`: print the effective configuration and inbox status

use crate::settings::{load_config, validate_config, AppConfig};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use triage_core::{format_error_for_cli, Agent, AgentResult};
use triage_skills::OllamaSkillExecutor;
use triage_tools::FsToolExecutor;

pub mod check;
pub mod plan;
pub mod run;

/// Inbox triage agent CLI
#[derive(Parser, Debug)]
#[command(name = "triage")]
#[command(about = "Analyze, report and archive inbox emails with a local LLM")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process the inbox
    Run {
        /// Keep processing in cycles until Ctrl+C
        #[arg(long)]
        cyclic: bool,
        /// Seconds to wait between cycles
        #[arg(long, value_name = "SECS")]
        interval: Option<u64>,
        /// Step ceiling per cycle
        #[arg(long, value_name = "N")]
        max_steps: Option<usize>,
    },
    /// Run the open-ended workflow for a goal
    Plan {
        /// What the agent should achieve
        goal: String,
        /// Step ceiling for the run
        #[arg(long, value_name = "N")]
        max_steps: Option<usize>,
    },
    /// Show effective configuration and inbox status
    Check,
}

/// Run the CLI command
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Run {
            cyclic,
            interval,
            max_steps,
        }) => {
            let mut config = load_with(max_steps)?;
            config.cycle.enabled |= cyclic;
            if let Some(secs) = interval {
                config.cycle.interval_secs = secs;
            }
            validate_config(&config)?;
            run::run(&config).await
        }
        Some(Commands::Plan { goal, max_steps }) => {
            let config = load_with(max_steps)?;
            validate_config(&config)?;
            plan::run(&config, &goal).await
        }
        Some(Commands::Check) => {
            let config = load_with(None)?;
            validate_config(&config)?;
            check::run(&config).await
        }
        None => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}

fn load_with(max_steps: Option<usize>) -> Result<AppConfig> {
    let mut config = load_config()?;
    if let Some(max) = max_steps {
        config.agent.max_steps = max;
    }
    Ok(config)
}

/// Wire the filesystem tools and the Ollama skills into an agent
pub(crate) fn build_agent(config: &AppConfig) -> Result<Agent> {
    let skills = OllamaSkillExecutor::new(config.llm.to_ollama())
        .context("Failed to create the Ollama client")?;
    let tools = FsToolExecutor::new(config.paths.clone());
    Ok(Agent::new(
        Arc::new(skills),
        Arc::new(tools),
        config.agent.clone(),
    ))
}

/// Print a run result for the terminal
pub(crate) fn print_result(result: &AgentResult) {
    println!("{}", result.summary());
}

/// Print a core error with its suggestion
pub(crate) fn print_error(error: &triage_core::Error) {
    eprintln!("{}", format_error_for_cli(error));
}
