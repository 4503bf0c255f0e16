//! Analysis report
//!
//! The report is a JSON Lines file: one `EmailAnalysisResult` object per line,
//! appended in processing order.

use crate::error::Result;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use triage_core::{EmailAnalysisResult, SaveToReportResponse};

/// Append one analysis to the report, creating the file and its parent directories
pub async fn append_to_report(
    report: &Path,
    analysis: &EmailAnalysisResult,
) -> Result<SaveToReportResponse> {
    if let Some(parent) = report.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut line = serde_json::to_string(analysis)?;
    line.push('\n');

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(report)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await?;

    debug!(
        path = %report.display(),
        source = %analysis.source_file.display(),
        "Appended analysis to report"
    );
    Ok(SaveToReportResponse {
        success: true,
        message: format!("Successfully saved analysis to {}", report.display()),
    })
}
