//! End-to-end: extract a snapshot from a fake Nuxt 2 build directory,
//! mutate the build, extract again, and diff the two snapshots.

use std::fs;
use std::path::Path;

use routediff_core::prelude::*;

fn write_build(dir: &Path, pages: &[(&str, &str)]) {
    fs::write(dir.join("client.manifest.json"), "{}").unwrap();
    let pages_dir = dir.join("server/pages");
    fs::create_dir_all(&pages_dir).unwrap();
    for (name, content) in pages {
        fs::write(pages_dir.join(name), content).unwrap();
    }
}

#[test]
fn unchanged_build_diffs_clean() {
    let dir = tempfile::tempdir().unwrap();
    write_build(
        dir.path(),
        &[("index.js", "home module"), ("about.js", "about module")],
    );

    let baseline = extract_build_snapshot(dir.path()).unwrap();
    let current = extract_build_snapshot(dir.path()).unwrap();

    let report = compare_builds(Some(&baseline), &current);
    assert!(report.changed_pages.is_empty());
    assert!(report.affected_routes.is_empty());
    assert!(!report.has_global_changes);
    assert_eq!(analyze_change_impact(&report), ChangeImpact::Low);
}

#[test]
fn edited_page_is_detected_with_its_route() {
    let dir = tempfile::tempdir().unwrap();
    write_build(
        dir.path(),
        &[("index.js", "home v1"), ("about.js", "about module")],
    );
    let baseline = extract_build_snapshot(dir.path()).unwrap();

    fs::write(dir.path().join("server/pages/index.js"), "home v2").unwrap();
    let current = extract_build_snapshot(dir.path()).unwrap();

    let report = compare_builds(Some(&baseline), &current);
    assert_eq!(report.changed_pages, vec!["index.js"]);
    assert_eq!(report.affected_routes, vec!["/"]);
    assert!(!report.has_global_changes);
}

#[test]
fn added_and_removed_pages_are_classified() {
    let dir = tempfile::tempdir().unwrap();
    write_build(
        dir.path(),
        &[("index.js", "home"), ("old.js", "going away")],
    );
    let baseline = extract_build_snapshot(dir.path()).unwrap();

    fs::remove_file(dir.path().join("server/pages/old.js")).unwrap();
    fs::write(dir.path().join("server/pages/fresh.js"), "brand new").unwrap();
    let current = extract_build_snapshot(dir.path()).unwrap();

    let report = compare_builds(Some(&baseline), &current);
    assert_eq!(report.new_pages, vec!["fresh.js"]);
    assert_eq!(report.deleted_pages, vec!["old.js"]);
    // Deletions never contribute a route to re-test.
    assert_eq!(report.affected_routes, vec!["/fresh"]);
}

#[test]
fn component_id_survives_snapshot_serialization() {
    let dir = tempfile::tempdir().unwrap();
    write_build(
        dir.path(),
        &[(
            "index.js",
            "var n = r(componentNormalizer, render, staticRenderFns, \"1ce46445\", null)",
        )],
    );

    let snapshot = extract_build_snapshot(dir.path()).unwrap();
    assert_eq!(
        snapshot.pages["index.js"].component_id.as_deref(),
        Some("1ce46445")
    );

    // The CLI persists baselines as JSON; the round trip must be lossless.
    let json = serde_json::to_string_pretty(&snapshot).unwrap();
    let restored: BuildSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
}

#[test]
fn many_new_pages_escalate_and_rank_high() {
    let dir = tempfile::tempdir().unwrap();
    write_build(dir.path(), &[("index.js", "home")]);
    let baseline = extract_build_snapshot(dir.path()).unwrap();

    for i in 0..6 {
        fs::write(
            dir.path().join(format!("server/pages/page{i}.js")),
            format!("page {i}"),
        )
        .unwrap();
    }
    let current = extract_build_snapshot(dir.path()).unwrap();

    let report = compare_builds(Some(&baseline), &current);
    assert_eq!(report.new_pages.len(), 6);
    assert!(report.has_global_changes);
    assert!(report.summary.contains("Global changes suspected"));
    assert_eq!(analyze_change_impact(&report), ChangeImpact::High);
    assert!(detect_change_types(&report).has_style_changes);
}
