//! Store file I/O: whole-file load and atomic whole-file save.
//!
//! The file is a pretty-printed JSON array of items. Saves go to
//! `<path>.tmp` first and are renamed over the store file, so a crash
//! mid-write leaves the previous contents intact.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::models::Item;

/// Read and parse the store file at `path`.
///
/// A missing, unreadable or malformed file is an error; there is no
/// fallback to an empty collection.
pub fn load(path: &Path) -> Result<Vec<Item>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read store file {}", path.display()))?;

    let items: Vec<Item> = serde_json::from_slice(&bytes)
        .with_context(|| format!("Store file {} is not a JSON array of items", path.display()))?;

    tracing::debug!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

/// Serialize `items` and replace the store file at `path` with them.
pub async fn save(path: &Path, items: &[Item]) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(items).context("Failed to serialize items")?;

    let tmp = tmp_path(path);
    tokio::fs::write(&tmp, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    tokio::fs::rename(&tmp, path)
        .await
        .with_context(|| format!("Failed to replace store file {}", path.display()))?;

    tracing::debug!("Flushed {} items to {}", items.len(), path.display());
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    path.with_extension(format!("{ext}.tmp"))
}
