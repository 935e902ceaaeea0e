//! routediff-core
//!
//! Core primitives for routediff:
//! - Build snapshot and page fingerprint models
//! - Metadata extraction from a Nuxt 2 server-rendered build directory
//! - Snapshot comparison into a classified change report
//! - Change impact and change-type analyses
//!
//! This crate performs no network I/O and no filesystem writes. The only
//! filesystem access is the read-only scan done by [`extract`]. Logging is
//! not wired in here either: the comparator reports interesting events
//! through an injected [`compare::DiffObserver`], and callers decide what
//! to do with them.

pub mod compare;
pub mod errors;
pub mod extract;
pub mod model;

pub use crate::errors::{ExtractError, ExtractResult};

/// Framework tag recorded in every snapshot produced by this crate.
///
/// Comparisons across different framework tags are not validated by the
/// comparator; that check belongs to the caller.
pub const FRAMEWORK_NUXT2: &str = "nuxt2";

/// More simultaneous page changes than this and the diff is treated as a
/// global change (shared layout or asset edit) rather than independent
/// page edits. Exactly this many does not escalate.
pub const GLOBAL_CHANGE_THRESHOLD: usize = 5;

/// Fixed sub-paths and markers of the one supported build layout.
///
/// These must remain stable: they define what "looks like a Nuxt 2 build"
/// means to the extractor.
pub mod layout {
    /// Client-side build manifest. Existence-checked only, never parsed.
    pub const CLIENT_MANIFEST: &str = "client.manifest.json";
    /// Directory holding one compiled module per server-rendered page.
    pub const SERVER_PAGES: &str = "server/pages";
    /// Extension of compiled page modules.
    pub const PAGE_EXT: &str = ".js";
    /// Page file that maps to the root route.
    pub const INDEX_PAGE: &str = "index.js";
    /// Marker preceding the scoped component id in compiled page output.
    pub const COMPONENT_MARKER: &str = "componentNormalizer";
}

/// Convenience re-exports.
pub mod prelude {
    pub use crate::compare::{
        analyze_change_impact, compare_builds, compare_builds_with, compare_component_ids,
        detect_change_types, DiffEvent, DiffObserver, NullObserver,
    };
    pub use crate::extract::extract_build_snapshot;
    pub use crate::model::{BuildSnapshot, ChangeImpact, ChangeReport, ChangeTypes, PageFingerprint};
    pub use crate::{ExtractError, ExtractResult};
}
