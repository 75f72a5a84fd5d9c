//! End-to-end CLI integration tests using scenario fixtures.
//!
//! Each fixture in `tests/fixtures/` contains:
//! - an `onehealth.toml` scenario
//! - an `expected.summary.json` with the levels and four-decimal scores the report must carry
//!   (fixtures without one are expected to be rejected)
//!
//! These tests run the CLI against each fixture and verify:
//! 1. Exit code matches expected (0 = ok, 1 = invalid input, 2 = alert reached)
//! 2. The report summary matches expected

use assert_cmd::Command;
use onehealth_test_util::{normalize_nondeterministic, summarize_report};
use predicates::prelude::*;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a Command for the onehealth binary.
#[allow(deprecated)]
fn onehealth_cmd() -> Command {
    Command::cargo_bin("onehealth").expect("onehealth binary not found - run `cargo build` first")
}

/// Get the path to the test fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("onehealth-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

/// Run `assess` against a fixture and return the exit code and the JSON report.
fn run_assess_on_fixture(fixture_name: &str) -> (i32, Value) {
    let config = fixtures_dir().join(fixture_name).join("onehealth.toml");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    let output = onehealth_cmd()
        .arg("--config")
        .arg(&config)
        .arg("assess")
        .arg("--report-out")
        .arg(&report_path)
        .output()
        .expect("Failed to run command");

    let exit_code = output.status.code().unwrap_or(-1);

    let report_content = std::fs::read_to_string(&report_path).expect("Failed to read report");
    let report: Value = serde_json::from_str(&report_content).expect("Failed to parse report JSON");

    (exit_code, report)
}

fn load_expected_summary(fixture_name: &str) -> Value {
    let expected_path = fixtures_dir()
        .join(fixture_name)
        .join("expected.summary.json");
    let content = std::fs::read_to_string(&expected_path).expect("Failed to read expected summary");
    serde_json::from_str(&content).expect("Failed to parse expected summary")
}

fn assert_summary_matches(report: &Value, fixture_name: &str) {
    let actual = summarize_report(report);
    let expected = load_expected_summary(fixture_name);
    assert_eq!(
        actual,
        expected,
        "Summary mismatch for fixture '{}'.\n\nActual:\n{}\n\nExpected:\n{}",
        fixture_name,
        serde_json::to_string_pretty(&actual).unwrap(),
        serde_json::to_string_pretty(&expected).unwrap()
    );
}

// ============================================================================
// Fixture tests
// ============================================================================

#[test]
fn fixture_worked_example_is_moderate() {
    let (exit_code, report) = run_assess_on_fixture("worked_example");
    assert_eq!(exit_code, 0);
    assert_summary_matches(&report, "worked_example");
    assert_eq!(report["data"]["scenario"], "worked example");
    assert_eq!(report["data"]["preset"], "baseline");
}

#[test]
fn fixture_amr_overloaded_raises_alert() {
    let (exit_code, report) = run_assess_on_fixture("amr_overloaded");
    assert_eq!(exit_code, 2, "alert_on = high should exit 2");
    assert_summary_matches(&report, "amr_overloaded");
    assert_eq!(report["data"]["alert_on"], "high");
}

#[test]
fn fixture_winter_surge_uses_preset() {
    let (exit_code, report) = run_assess_on_fixture("winter_surge");
    assert_eq!(exit_code, 0);
    assert_summary_matches(&report, "winter_surge");
    assert_eq!(report["data"]["preset"], "winter-surge");
}

#[test]
fn fixture_intensive_farming_scores_zoonotic_spillover() {
    let (exit_code, report) = run_assess_on_fixture("intensive_farming");
    assert_eq!(exit_code, 0);
    assert_summary_matches(&report, "intensive_farming");
    assert_eq!(report["data"]["preset"], "intensive-farming");
}

#[test]
fn fixture_models_disabled_is_low_and_empty() {
    let (exit_code, report) = run_assess_on_fixture("models_disabled");
    assert_eq!(exit_code, 0);
    assert_summary_matches(&report, "models_disabled");
    assert_eq!(report["assessments"], Value::Array(Vec::new()));
}

#[test]
fn fixture_out_of_range_is_rejected() {
    let config = fixtures_dir().join("out_of_range").join("onehealth.toml");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    onehealth_cmd()
        .arg("--config")
        .arg(&config)
        .arg("assess")
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("onehealth error:"))
        .stderr(predicate::str::contains("humidity_pct = 120 is out of range"));

    assert!(!report_path.exists(), "no report on invalid input");
}

#[test]
fn fixture_unknown_category_is_rejected() {
    let config = fixtures_dir().join("unknown_category").join("onehealth.toml");
    onehealth_cmd()
        .arg("--config")
        .arg(&config)
        .arg("bacterial")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid bacterial.icu_capacity"))
        .stderr(predicate::str::contains("adequate|limited|overloaded"));
}

#[test]
fn reports_are_stable_apart_from_timestamps() {
    let (_, first) = run_assess_on_fixture("winter_surge");
    let (_, second) = run_assess_on_fixture("winter_surge");

    assert_eq!(
        normalize_nondeterministic(first.clone()),
        normalize_nondeterministic(second)
    );
    let fingerprint = first["data"]["input_fingerprint"]
        .as_str()
        .expect("fingerprint string");
    assert_eq!(fingerprint.len(), 64);
}
