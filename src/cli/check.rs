//! Configuration and inbox status

use crate::settings::AppConfig;
use anyhow::{Context, Result};
use triage_tools::builtins::scan_inbox;

/// Print the effective configuration and how many emails are waiting
pub async fn run(config: &AppConfig) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(config).context("Failed to render configuration")?;
    println!("Effective configuration:\n{rendered}\n");

    let inbox = &config.paths.inbox;
    if tokio::fs::try_exists(inbox).await.unwrap_or(false) {
        let files = scan_inbox(inbox)
            .await
            .with_context(|| format!("Failed to scan {}", inbox.display()))?;
        println!("✅ Inbox {}: {} email(s) waiting", inbox.display(), files.len());
    } else {
        println!(
            "⚠️  Inbox {} does not exist yet; it is created on the first run",
            inbox.display()
        );
    }

    Ok(())
}
