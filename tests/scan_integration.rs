//! Integration tests for the import scanner and launch planning.
//!
//! These run the scanner against the Python fixtures in testdata/ and
//! check that the resolved package lists drive the launch plan the
//! way the installer expects.

use std::fs;
use std::path::PathBuf;

use venvrun::runner::{Launcher, Step};
use venvrun::scan::scan;
use venvrun::ScanReport;

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn read_fixture(name: &str) -> String {
    let path = testdata_path().join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {}", path.display(), e))
}

#[test]
fn test_fetch_fixture_resolves_requests_only() {
    let packages = scan(&read_fixture("fetch.py"));
    assert_eq!(packages, vec!["requests"]);
}

#[test]
fn test_stdlib_only_fixture_resolves_nothing() {
    let packages = scan(&read_fixture("stdlib_only.py"));
    assert!(packages.is_empty(), "got {:?}", packages);
}

#[test]
fn test_plain_fixture_resolves_nothing() {
    assert!(scan(&read_fixture("plain.py")).is_empty());
}

#[test]
fn test_mixed_fixture_order_dedup_and_skips() {
    // numpy.linalg resolves to numpy and dedups with the later plain
    // numpy import; the relative and indented imports are skipped.
    let packages = scan(&read_fixture("mixed.py"));
    assert_eq!(packages, vec!["numpy", "flask"]);
}

#[test]
fn test_scanner_is_idempotent_on_fixtures() {
    for name in ["fetch.py", "stdlib_only.py", "mixed.py", "plain.py"] {
        let text = read_fixture(name);
        assert_eq!(scan(&text), scan(&text), "fixture {}", name);
    }
}

#[test]
fn test_plan_for_fetch_fixture_installs_requests_then_runs() {
    let script = testdata_path().join("fetch.py");
    let packages = scan(&read_fixture("fetch.py"));

    let steps = Launcher::new(&script).plan(&packages);
    assert_eq!(
        steps,
        vec![
            Step::Install {
                package: "requests".to_string()
            },
            Step::Run {
                script: script.clone()
            },
        ]
    );
}

#[test]
fn test_scan_report_serializes_fixture_result() {
    let script = testdata_path().join("fetch.py");
    let report = ScanReport::new(&script, scan(&read_fixture("fetch.py")));

    let json: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();
    assert_eq!(json["count"], 1);
    assert_eq!(json["packages"][0], "requests");
    assert!(json["file"].as_str().unwrap().ends_with("fetch.py"));
}
