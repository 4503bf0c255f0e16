//! Open-ended workflow from INITIAL

use super::{build_agent, print_error, print_result};
use crate::settings::AppConfig;
use anyhow::Result;
use tracing::info;

/// Run the workflow for a free-form goal
pub async fn run(config: &AppConfig, goal: &str) -> Result<()> {
    let agent = build_agent(config)?;
    info!(goal = %goal, "Planning run");

    match agent.run(goal).await {
        Ok(result) => {
            for transition in result.state.workflow.history() {
                println!(
                    "  {} -> {}  {}",
                    transition.from_stage,
                    transition.to_stage,
                    transition.reason.as_deref().unwrap_or("")
                );
            }
            print_result(&result);
            Ok(())
        }
        Err(e) => {
            print_error(&e);
            Err(anyhow::Error::new(e).context("Planning run failed"))
        }
    }
}
