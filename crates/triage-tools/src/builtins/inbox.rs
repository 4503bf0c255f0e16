//! Inbox scanning

use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extension of files treated as emails
pub const EMAIL_EXTENSION: &str = "txt";

/// List email files in the inbox, sorted by path.
///
/// A missing inbox is created and reported as empty.
pub async fn scan_inbox(inbox: &Path) -> Result<Vec<PathBuf>> {
    if !tokio::fs::try_exists(inbox).await? {
        debug!(path = %inbox.display(), "Inbox missing, creating it");
        tokio::fs::create_dir_all(inbox).await?;
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let mut entries = tokio::fs::read_dir(inbox).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_email = path
            .extension()
            .is_some_and(|ext| ext == EMAIL_EXTENSION);
        if is_email && entry.file_type().await?.is_file() {
            files.push(path);
        }
    }
    files.sort();

    debug!(path = %inbox.display(), count = files.len(), "Scanned inbox");
    Ok(files)
}
