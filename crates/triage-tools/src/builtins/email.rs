//! Email reading

use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;
use triage_core::ReadEmailResponse;

/// Read an email file as UTF-8
pub async fn read_email(path: &Path) -> Result<ReadEmailResponse> {
    if !tokio::fs::try_exists(path).await? {
        return Err(Error::NotFound(format!(
            "email file not found: {}",
            path.display()
        )));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    debug!(path = %path.display(), bytes = content.len(), "Read email");
    Ok(ReadEmailResponse { content, file_name })
}
