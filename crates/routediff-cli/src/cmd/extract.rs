use std::path::Path;

use anyhow::Result;
use routediff_core::extract::extract_build_snapshot;

use crate::{output, store};

pub fn run(build_dir: &Path, out: Option<&Path>) -> Result<()> {
    let snapshot = extract_build_snapshot(build_dir)?;
    tracing::info!(
        pages = snapshot.pages.len(),
        framework = %snapshot.framework,
        "extracted build snapshot"
    );

    match out {
        Some(path) => {
            store::save_json(path, &snapshot)?;
            if !output::is_json() {
                println!("wrote snapshot of {} pages to {}", snapshot.pages.len(), path.display());
            }
        }
        None => output::print(&snapshot)?,
    }
    Ok(())
}
