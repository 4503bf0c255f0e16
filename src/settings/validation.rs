//! Configuration validation

use super::types::AppConfig;
use anyhow::{bail, Result};
use tracing::warn;

/// Reject settings the agent cannot run with
pub fn validate_config(config: &AppConfig) -> Result<()> {
    if config.agent.max_steps == 0 {
        bail!("agent.max_steps must be at least 1");
    }

    for (key, path) in [
        ("paths.inbox", &config.paths.inbox),
        ("paths.archive", &config.paths.archive),
        ("paths.report", &config.paths.report),
    ] {
        if path.as_os_str().is_empty() {
            bail!("{key} must not be empty");
        }
    }

    if config.cycle.enabled && config.cycle.interval_secs == 0 {
        bail!("cycle.interval_secs must be at least 1 when cycling is enabled");
    }

    if config.paths.inbox == config.paths.archive {
        warn!(
            "Inbox and archive point to the same directory ({}). \
             Archived emails will be picked up again on the next cycle.",
            config.paths.inbox.display()
        );
    }

    Ok(())
}
