//! Integration tests for the analyze command (CLI)

use std::fs;

use predicates::prelude::*;

use crate::helpers::{fixture, pagestat, run_pagestat, temp_file, temp_fixture};

// ============================================================================
// Report Output Tests
// ============================================================================

#[test]
fn snapshot_roster_report() {
    let input = fixture("roster.json");
    let (stdout, _stderr, exit_code) = run_pagestat(&["analyze", input.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout, @r###"
# Data Analysis Summary

Total records: 5
Unique persons: 4
Unique divisions: 2
Unique groups: 2
Unique departments: 2

## Top Divisions
- D1: 3 occurrences
- D2: 2 occurrences

## Top Groups
- G1: 4 occurrences
- G2: 1 occurrences

## Top Departments
- Dept1: 3 occurrences
- Dept2: 2 occurrences

## Division-Group Distribution
- D1 with G1: 2 occurrences
- D2 with G1: 2 occurrences
- D1 with G2: 1 occurrences

## Resource Distribution
- D1: 2 unique persons
- D2: 2 unique persons
"###);
}

#[test]
fn prints_document_summary_to_stderr() {
    pagestat()
        .args(["analyze"])
        .arg(fixture("roster.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Total pages: 3"))
        .stderr(predicate::str::contains("Pages with content: 2"));
}

#[test]
fn report_is_identical_across_runs() {
    let input = fixture("roster.json");
    let (first, _, _) = run_pagestat(&["analyze", input.to_str().unwrap()]);
    let (second, _, _) = run_pagestat(&["analyze", input.to_str().unwrap()]);

    assert_eq!(first, second);
}

#[test]
fn top_limits_ranked_sections() {
    let input = fixture("roster.json");
    let (stdout, _, exit_code) = run_pagestat(&["analyze", input.to_str().unwrap(), "--top", "1"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("## Top Divisions\n- D1: 3 occurrences\n\n## Top Groups"));
    assert!(stdout.contains("## Division-Group Distribution\n- D1 with G1: 2 occurrences\n\n"));
    // Totals are not affected by truncation
    assert!(stdout.contains("Total records: 5\n"));
}

#[test]
fn writes_report_to_output_file() {
    let (temp_dir, input) = temp_fixture("roster.json");
    let output = temp_dir.path().join("reports").join("summary.txt");

    pagestat()
        .arg("analyze")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Saved to"));

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.starts_with("# Data Analysis Summary\n"));
    assert!(report.contains("Total records: 5\n"));
}

#[test]
fn stats_flag_reports_dropped_lines() {
    pagestat()
        .arg("analyze")
        .arg(fixture("roster.json"))
        .arg("--stats")
        .assert()
        .success()
        .stderr(predicate::str::contains("Lines scanned: 9"))
        .stderr(predicate::str::contains("Candidate lines: 6"))
        .stderr(predicate::str::contains("Malformed lines: 1"))
        .stderr(predicate::str::contains("Records: 5"));
}

#[test]
fn json_output_contains_rankings() {
    let input = fixture("roster.json");
    let (stdout, _, exit_code) = run_pagestat(&["analyze", input.to_str().unwrap(), "--json"]);

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["total_records"], 5);
    assert_eq!(value["unique_persons"], 4);
    assert_eq!(value["top_divisions"][0]["key"], "D1");
    assert_eq!(value["top_divisions"][0]["count"], 3);
    assert_eq!(value["top_division_groups"][1]["key"][0], "D2");
    assert_eq!(value["top_division_groups"][1]["key"][1], "G1");
}

// ============================================================================
// Input Format Tests
// ============================================================================

#[test]
fn reads_form_feed_text() {
    let input = fixture("roster.txt");
    let (stdout, stderr, exit_code) = run_pagestat(&["analyze", input.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Total records: 3\n"));
    assert!(stderr.contains("Total pages: 3"));
    assert!(stderr.contains("Pages with content: 2"));
}

#[test]
fn sentinel_flag_overrides_default() {
    let input = fixture("roster.txt");
    let (stdout, _, exit_code) =
        run_pagestat(&["analyze", input.to_str().unwrap(), "--sentinel", "EMP-"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Total records: 1\n"));
    assert!(stdout.contains("- D4: 1 occurrences\n"));
}

#[test]
fn sentinel_from_config_file() {
    let (temp_dir, config) = temp_file("config.toml", "[extraction]\nsentinel = \"EMP-\"\n");

    pagestat()
        .arg("--config")
        .arg(&config)
        .arg("analyze")
        .arg(fixture("roster.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Total records: 1\n"));

    drop(temp_dir);
}

#[test]
fn title_from_config_file() {
    let (temp_dir, config) = temp_file("config.toml", "[report]\ntitle = \"Workforce Summary\"\n");

    pagestat()
        .arg("--config")
        .arg(&config)
        .arg("analyze")
        .arg(fixture("roster.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Workforce Summary\n"));

    drop(temp_dir);
}

#[test]
fn empty_document_reports_zero_totals() {
    let input = fixture("empty.json");
    let (stdout, stderr, exit_code) = run_pagestat(&["analyze", input.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Total records: 0\n"));
    assert!(stdout.contains("Unique persons: 0\n"));
    assert!(stdout.contains("## Top Divisions\n\n## Top Groups\n"));
    assert!(stderr.contains("no record lines found"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn missing_input_fails() {
    let (_stdout, stderr, exit_code) = run_pagestat(&["analyze", "/nonexistent/roster.json"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to read"));
}

#[test]
fn malformed_json_fails() {
    let (temp_dir, path) = temp_file("broken.json", "{\"content\": [");

    pagestat()
        .arg("analyze")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid extraction file"));

    drop(temp_dir);
}

#[test]
fn empty_sentinel_fails() {
    let input = fixture("roster.json");
    let (_stdout, stderr, exit_code) =
        run_pagestat(&["analyze", input.to_str().unwrap(), "--sentinel", ""]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid record sentinel"));
}

#[test]
fn analyze_without_input_is_usage_error() {
    let (_stdout, stderr, exit_code) = run_pagestat(&["analyze"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("<INPUT>"));
}
