//! Email archival

use crate::error::{Error, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use triage_core::ArchiveEmailResponse;

/// Move an email into the archive directory.
///
/// When the archive already holds a file with the same name, the moved file
/// gets a `_<YYYYmmdd_HHMMSS>` suffix before its extension.
pub async fn archive_email(source: &Path, archive: &Path) -> Result<ArchiveEmailResponse> {
    if !tokio::fs::try_exists(source).await? {
        return Err(Error::NotFound(format!(
            "source file not found: {}",
            source.display()
        )));
    }
    let file_name = source
        .file_name()
        .ok_or_else(|| Error::InvalidInput(format!("not a file path: {}", source.display())))?;

    tokio::fs::create_dir_all(archive).await?;

    let mut destination = archive.join(file_name);
    if tokio::fs::try_exists(&destination).await? {
        destination = timestamped_destination(source, archive);
        debug!(path = %destination.display(), "Archive name taken, using timestamped name");
    }

    move_file(source, &destination).await?;

    Ok(ArchiveEmailResponse {
        success: true,
        message: format!(
            "Successfully archived {} to {}",
            file_name.to_string_lossy(),
            destination.display()
        ),
    })
}

fn timestamped_destination(source: &Path, archive: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = source
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    archive.join(format!("{stem}_{timestamp}{suffix}"))
}

async fn move_file(source: &Path, destination: &Path) -> Result<()> {
    if let Err(rename_err) = tokio::fs::rename(source, destination).await {
        // rename cannot cross filesystems
        warn!(error = %rename_err, "Rename failed, falling back to copy");
        tokio::fs::copy(source, destination).await?;
        tokio::fs::remove_file(source).await?;
    }
    Ok(())
}
