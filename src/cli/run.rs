//! Inbox processing, single-shot or cyclic

use super::{build_agent, print_error, print_result};
use crate::settings::AppConfig;
use anyhow::Result;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info};

/// Process the inbox once, or in cycles when cycling is enabled
pub async fn run(config: &AppConfig) -> Result<()> {
    let agent = build_agent(config)?;

    if !config.cycle.enabled {
        return match agent.run_email_cycle().await {
            Ok(result) => {
                print_result(&result);
                Ok(())
            }
            Err(e) => {
                print_error(&e);
                Err(anyhow::Error::new(e).context("Inbox cycle failed"))
            }
        };
    }

    let interval = Duration::from_secs(config.cycle.interval_secs);
    let mut shutdown = shutdown_signal();
    info!(
        interval_secs = config.cycle.interval_secs,
        inbox = %config.paths.inbox.display(),
        "Starting cyclic mode. Press Ctrl+C to stop."
    );

    let mut cycle: u64 = 0;
    loop {
        cycle += 1;
        info!(cycle, "Starting inbox cycle");
        match agent.run_email_cycle().await {
            Ok(result) => print_result(&result),
            // one bad cycle does not stop the service
            Err(e) => {
                error!(cycle, error = %e, "Inbox cycle failed");
                print_error(&e);
            }
        }

        if *shutdown.borrow() {
            break;
        }
        tokio::select! {
            Ok(()) = shutdown.changed() => break,
            () = tokio::time::sleep(interval) => {}
        }
    }

    info!(cycles = cycle, "Shutdown signal received, stopped cyclic mode");
    Ok(())
}

/// Flips to `true` on Ctrl+C. A running cycle is allowed to finish first.
fn shutdown_signal() -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl+C received, stopping after the current cycle");
                let _ = tx.send(true);
            }
            Err(e) => error!(error = %e, "Failed to listen for Ctrl+C"),
        }
    });
    rx
}
