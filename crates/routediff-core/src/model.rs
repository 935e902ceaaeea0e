//! Data models for build snapshots and change reports.
//!
//! All types here are plain data: constructed once, never mutated after,
//! and serde-friendly so the caller can persist snapshots between builds
//! in whatever store it likes (the CLI uses JSON files).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fingerprint of one compiled page file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFingerprint {
    /// Lowercase-hex content digest. Pure function of the file bytes: two
    /// pages with identical content hash identically regardless of name.
    pub hash: String,
    /// Scoped component id extracted from the compiled output, when the
    /// marker pattern is present. `None` means "not found", which is an
    /// expected outcome, not an error.
    pub component_id: Option<String>,
    /// URL path derived from the file name.
    pub route: String,
    /// Byte length of the page's compiled content.
    pub size: u64,
}

/// Everything extracted from one build invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSnapshot {
    /// Build format tag, e.g. [`crate::FRAMEWORK_NUXT2`].
    pub framework: String,
    /// Fingerprints keyed by page file name. `BTreeMap` keeps iteration
    /// order stable across runs.
    pub pages: BTreeMap<String, PageFingerprint>,
    /// Unix seconds at extraction time. Informational only; never consulted
    /// by the comparator.
    pub timestamp: i64,
}

impl BuildSnapshot {
    /// All routes in the snapshot, in page-name order.
    pub fn routes(&self) -> Vec<String> {
        self.pages.values().map(|p| p.route.clone()).collect()
    }
}

/// Classified diff between two snapshots.
///
/// The three page lists partition the diff: every current page name lands
/// in `changed_pages`, `new_pages`, or neither; every baseline-only name
/// lands in `deleted_pages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeReport {
    pub changed_pages: Vec<String>,
    pub new_pages: Vec<String>,
    pub deleted_pages: Vec<String>,
    /// Routes needing re-test: changed-page routes first, then new-page
    /// routes. Deleted pages contribute nothing (there is no current route
    /// to test). Not deduplicated; two page files mapping to the same
    /// derived route both appear.
    pub affected_routes: Vec<String>,
    /// When set, the diff looks like a shared-layout or global-asset change
    /// and every route should be re-tested, not just `affected_routes`.
    pub has_global_changes: bool,
    /// Human-readable rendering of the above.
    pub summary: String,
}

/// Coarse ordinal for how much re-testing a report implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeImpact {
    Low,
    Medium,
    High,
}

/// Provisional layout/content/style breakdown derived from report counts.
/// Placeholder until real per-page analysis exists; the shape is the
/// contract, the mapping is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeTypes {
    pub has_layout_changes: bool,
    pub has_content_changes: bool,
    pub has_style_changes: bool,
}
