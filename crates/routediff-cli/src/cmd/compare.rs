use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use routediff_core::compare::{analyze_change_impact, compare_builds_with, compare_component_ids};
use routediff_core::extract::extract_build_snapshot;
use routediff_core::model::{ChangeImpact, ChangeReport};

use crate::observe::TracingObserver;
use crate::{output, store};

#[derive(Debug, Serialize)]
pub struct CompareOut {
    pub report: ChangeReport,
    pub impact: ChangeImpact,
    /// Pages whose scoped component id changed; diagnostics only.
    pub changed_components: Vec<String>,
}

pub fn run(build_dir: &Path, baseline_path: Option<&Path>, out: Option<&Path>) -> Result<()> {
    let current = extract_build_snapshot(build_dir)?;
    let baseline = match baseline_path {
        Some(path) => store::load_snapshot(path)?,
        None => None,
    };

    if let Some(base) = &baseline {
        if base.framework != current.framework {
            // Cross-framework diffs are nonsense; the comparator itself
            // does not check, so warn loudly here.
            tracing::warn!(
                baseline = %base.framework,
                current = %current.framework,
                "framework tags differ; diff results are unreliable"
            );
        }
    }

    let mut observer = TracingObserver;
    let report = compare_builds_with(baseline.as_ref(), &current, &mut observer);
    let changed_components = match &baseline {
        Some(base) => compare_component_ids(base, &current, &mut observer),
        None => Vec::new(),
    };
    let impact = analyze_change_impact(&report);

    if let Some(path) = out {
        store::save_json(path, &report)?;
    }

    if output::is_json() {
        output::print(&CompareOut {
            report,
            impact,
            changed_components,
        })?;
    } else {
        output::summary_line(&report.summary, report.has_global_changes)?;
        println!("impact: {impact:?}");
    }
    Ok(())
}
