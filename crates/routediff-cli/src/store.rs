//! Baseline snapshot persistence.
//!
//! The core does not own a storage format; this module pins the CLI's
//! choice: pretty-printed JSON files, one snapshot per file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use routediff_core::model::BuildSnapshot;

/// Load a baseline snapshot. A nonexistent path is the absent-baseline
/// case (first-ever build), not an error.
pub fn load_snapshot(path: &Path) -> Result<Option<BuildSnapshot>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read baseline {}", path.display()))?;
    let snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("invalid baseline snapshot {}", path.display()))?;
    Ok(Some(snapshot))
}

pub fn save_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
}
