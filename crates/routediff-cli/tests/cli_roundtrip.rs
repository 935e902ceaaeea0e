//! Black-box test of the `routediff` binary: extract a baseline, edit the
//! build, compare, and check the persisted report.

use std::fs;
use std::path::Path;

use assert_cmd::Command;

fn write_build(dir: &Path, pages: &[(&str, &str)]) {
    fs::write(dir.join("client.manifest.json"), "{}").unwrap();
    let pages_dir = dir.join("server/pages");
    fs::create_dir_all(&pages_dir).unwrap();
    for (name, content) in pages {
        fs::write(pages_dir.join(name), content).unwrap();
    }
}

#[test]
fn extract_then_compare_reports_the_edit() {
    let dir = tempfile::tempdir().unwrap();
    let build = dir.path().join("dist");
    fs::create_dir_all(&build).unwrap();
    write_build(&build, &[("index.js", "home v1"), ("about.js", "about v1")]);

    let baseline = dir.path().join("baseline.json");
    Command::cargo_bin("routediff")
        .unwrap()
        .args(["extract"])
        .arg(&build)
        .arg("--out")
        .arg(&baseline)
        .assert()
        .success();

    let snapshot: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&baseline).unwrap()).unwrap();
    assert_eq!(snapshot["framework"], "nuxt2");
    assert_eq!(snapshot["pages"].as_object().unwrap().len(), 2);

    fs::write(build.join("server/pages/about.js"), "about v2").unwrap();

    let report_path = dir.path().join("report.json");
    Command::cargo_bin("routediff")
        .unwrap()
        .args(["--json", "compare"])
        .arg(&build)
        .arg("--baseline")
        .arg(&baseline)
        .arg("--out")
        .arg(&report_path)
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["changed_pages"], serde_json::json!(["about.js"]));
    assert_eq!(report["new_pages"], serde_json::json!([]));
    assert_eq!(report["affected_routes"], serde_json::json!(["/about"]));
    assert_eq!(report["has_global_changes"], false);
}

#[test]
fn compare_without_baseline_escalates() {
    let dir = tempfile::tempdir().unwrap();
    let build = dir.path().join("dist");
    fs::create_dir_all(&build).unwrap();
    write_build(&build, &[("index.js", "home")]);

    let report_path = dir.path().join("report.json");
    Command::cargo_bin("routediff")
        .unwrap()
        .args(["compare"])
        .arg(&build)
        .arg("--out")
        .arg(&report_path)
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["new_pages"], serde_json::json!(["index.js"]));
    assert_eq!(report["has_global_changes"], true);
}

#[test]
fn unrecognized_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("routediff")
        .unwrap()
        .args(["extract"])
        .arg(dir.path())
        .assert()
        .failure();
}
