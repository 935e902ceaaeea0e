//! Snapshot comparison.
//!
//! The comparator is a pure function over two snapshots. It never fails:
//! every input, including an absent baseline, produces a report. Anything
//! worth logging along the way is pushed through a [`DiffObserver`] so the
//! algorithm itself stays free of side effects and fully testable without
//! a logging stack.
//!
//! Framework tags are deliberately not validated here; comparing snapshots
//! of different formats is the caller's mistake to prevent.

use crate::model::{BuildSnapshot, ChangeImpact, ChangeReport, ChangeTypes};
use crate::GLOBAL_CHANGE_THRESHOLD;

/// An event the comparator considers worth surfacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffEvent<'a> {
    PageChanged { name: &'a str, size_delta: i64 },
    PageAdded { name: &'a str },
    PageDeleted { name: &'a str },
    GlobalChangeSuspected { total_changes: usize },
    ComponentIdChanged { name: &'a str, from: &'a str, to: &'a str },
}

/// Injected sink for [`DiffEvent`]s.
pub trait DiffObserver {
    fn on_event(&mut self, event: DiffEvent<'_>);
}

/// Observer that drops every event.
#[derive(Debug, Default)]
pub struct NullObserver;

impl DiffObserver for NullObserver {
    fn on_event(&mut self, _event: DiffEvent<'_>) {}
}

/// Compare two snapshots without any observability.
pub fn compare_builds(baseline: Option<&BuildSnapshot>, current: &BuildSnapshot) -> ChangeReport {
    compare_builds_with(baseline, current, &mut NullObserver)
}

/// Compare two snapshots, reporting per-page events to `observer`.
///
/// With no baseline, every current page is new and the report escalates
/// unconditionally: a first-ever build must be treated as "test
/// everything". With a baseline, pages are classified in three passes
/// (changed, new, deleted); `affected_routes` accumulates changed-page
/// routes first, then new-page routes, and deletions contribute none.
pub fn compare_builds_with(
    baseline: Option<&BuildSnapshot>,
    current: &BuildSnapshot,
    observer: &mut dyn DiffObserver,
) -> ChangeReport {
    let Some(baseline) = baseline else {
        let new_pages: Vec<String> = current.pages.keys().cloned().collect();
        return ChangeReport {
            changed_pages: Vec::new(),
            summary: format!("No baseline found. Will test all {} pages.", new_pages.len()),
            affected_routes: current.routes(),
            new_pages,
            deleted_pages: Vec::new(),
            has_global_changes: true,
        };
    };

    let mut changed_pages = Vec::new();
    let mut new_pages = Vec::new();
    let mut deleted_pages = Vec::new();
    let mut affected_routes = Vec::new();

    // Same file, different hash.
    for (name, page) in &current.pages {
        if let Some(base) = baseline.pages.get(name) {
            if base.hash != page.hash {
                changed_pages.push(name.clone());
                affected_routes.push(page.route.clone());
                // Size delta is informational only, never part of the
                // classification decision.
                observer.on_event(DiffEvent::PageChanged {
                    name,
                    size_delta: page.size as i64 - base.size as i64,
                });
            }
        }
    }

    for (name, page) in &current.pages {
        if !baseline.pages.contains_key(name) {
            new_pages.push(name.clone());
            affected_routes.push(page.route.clone());
            observer.on_event(DiffEvent::PageAdded { name });
        }
    }

    for name in baseline.pages.keys() {
        if !current.pages.contains_key(name) {
            deleted_pages.push(name.clone());
            observer.on_event(DiffEvent::PageDeleted { name });
        }
    }

    let has_global_changes =
        detect_global_changes(changed_pages.len() + new_pages.len(), observer);

    let summary = render_summary(
        &changed_pages,
        &new_pages,
        &deleted_pages,
        &affected_routes,
        has_global_changes,
    );

    ChangeReport {
        changed_pages,
        new_pages,
        deleted_pages,
        affected_routes,
        has_global_changes,
        summary,
    }
}

/// A burst of simultaneous page changes usually means a shared layout or
/// global asset changed, not N independent edits. Heuristic: false
/// positives and negatives are accepted.
fn detect_global_changes(total_changes: usize, observer: &mut dyn DiffObserver) -> bool {
    if total_changes > GLOBAL_CHANGE_THRESHOLD {
        observer.on_event(DiffEvent::GlobalChangeSuspected { total_changes });
        return true;
    }
    false
}

fn render_summary(
    changed: &[String],
    new: &[String],
    deleted: &[String],
    affected_routes: &[String],
    has_global_changes: bool,
) -> String {
    let mut parts = Vec::new();
    if !changed.is_empty() {
        parts.push(format!("{} changed", changed.len()));
    }
    if !new.is_empty() {
        parts.push(format!("{} new", new.len()));
    }
    if !deleted.is_empty() {
        parts.push(format!("{} deleted", deleted.len()));
    }

    if parts.is_empty() {
        return "No changes detected - skipping visual regression tests".to_string();
    }

    let change_text = parts.join(", ");
    if has_global_changes {
        return format!(
            "Detected {change_text} pages. Global changes suspected - will test all routes for safety."
        );
    }

    let route_count = affected_routes.len();
    format!(
        "Detected {change_text} pages. Will test {route_count} affected route{}: {}",
        if route_count == 1 { "" } else { "s" },
        affected_routes.join(", ")
    )
}

/// Pages whose component id is present on both sides and differs.
///
/// Diagnostic companion to [`compare_builds_with`]: a changed component id
/// means the page's underlying component implementation was touched, which
/// a byte-level hash diff cannot distinguish from, say, a banner edit.
pub fn compare_component_ids(
    baseline: &BuildSnapshot,
    current: &BuildSnapshot,
    observer: &mut dyn DiffObserver,
) -> Vec<String> {
    let mut changed_components = Vec::new();

    for (name, page) in &current.pages {
        let Some(base) = baseline.pages.get(name) else {
            continue;
        };
        if let (Some(from), Some(to)) = (base.component_id.as_deref(), page.component_id.as_deref())
        {
            if from != to {
                changed_components.push(name.clone());
                observer.on_event(DiffEvent::ComponentIdChanged { name, from, to });
            }
        }
    }

    changed_components
}

/// Map a report to a coarse re-test impact level.
///
/// A global escalation or more than 10 affected routes is high; more than
/// 3 is medium; anything else is low. Exactly 10 routes is not high on
/// count alone, exactly 3 is not medium.
pub fn analyze_change_impact(report: &ChangeReport) -> ChangeImpact {
    let total_affected = report.affected_routes.len();

    if report.has_global_changes || total_affected > 10 {
        ChangeImpact::High
    } else if total_affected > 3 {
        ChangeImpact::Medium
    } else {
        ChangeImpact::Low
    }
}

/// Coarse layout/content/style breakdown from existing counts.
///
/// Any page change implies both layout and content impact; only a global
/// escalation implies style impact. Provisional mapping, kept until real
/// per-page analysis replaces it.
pub fn detect_change_types(report: &ChangeReport) -> ChangeTypes {
    ChangeTypes {
        has_layout_changes: !report.changed_pages.is_empty(),
        has_content_changes: !report.changed_pages.is_empty(),
        has_style_changes: report.has_global_changes,
    }
}
