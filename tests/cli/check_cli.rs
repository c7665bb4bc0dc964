use std::path::Path;

use context_assert::cmd::check::{CheckCommandArgs, run_with_stdin};
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::tempdir;

const SCHEMA_PLAN: &str = r#"
context: Illustrative Example
detail: checking schema defs
checks:
  - check: record_property
    field: default
  - check: optional_record_label
    field: colLabel
  - check: record_id
    field: fieldId
"#;

const SCHEMA_DEFS: &str = r#"[
  {"fieldId": "participantId", "default": ""},
  {"fieldId": "lastName", "colLabel": "Last Name", "default": ""},
  {"fieldId": "firstName", "colLabel": "Fast Name", "default": ""},
  {"fieldId": "lastName", "colLabel": "Middle Name", "default": ""}
]"#;

fn write_plan(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).expect("write plan");
    path
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout json")
}

#[test]
fn failing_plan_exits_two_with_report_on_stdout() {
    let dir = tempdir().expect("tempdir");
    let plan = write_plan(dir.path(), "plan.yaml", SCHEMA_PLAN);

    let output = assert_cmd::cargo::cargo_bin_cmd!("context-assert")
        .env_remove("RUST_LOG")
        .args(["check", "--plan"])
        .arg(&plan)
        .write_stdin(SCHEMA_DEFS)
        .assert()
        .code(2)
        .stderr(predicate::str::is_empty())
        .get_output()
        .stdout
        .clone();

    let report = stdout_json(&output);
    assert_eq!(
        report,
        json!({
            "passed": false,
            "checks_run": 3,
            "failure": {
                "check_index": 2,
                "check": "record_id",
                "kind": "invalid_id",
                "reason": "repeated",
                "message": "ASSERT_ARRAY_WITH_RECORD_ID_FAIL: expected array of objects with unique string identifier -- assertion context is 'Illustrative Example' (checking schema defs) -- fieldId: 'lastName' is repeated",
                "index": 1,
                "value": "lastName"
            }
        })
    );
}

#[test]
fn passing_plan_exits_zero() {
    let dir = tempdir().expect("tempdir");
    let plan = write_plan(dir.path(), "plan.yaml", SCHEMA_PLAN);
    let input = dir.path().join("defs.json");
    let fixed = SCHEMA_DEFS.replacen(
        r#""lastName", "colLabel": "Middle"#,
        r#""middleName", "colLabel": "Middle"#,
        1,
    );
    std::fs::write(&input, fixed).expect("write input");

    assert_cmd::cargo::cargo_bin_cmd!("context-assert")
        .env_remove("RUST_LOG")
        .args(["check", "--plan"])
        .arg(&plan)
        .arg("--input")
        .arg(&input)
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            r#"{"passed":true,"checks_run":3,"failure":null}"#,
        ));
}

#[test]
fn flags_override_plan_labels() {
    let dir = tempdir().expect("tempdir");
    let plan = write_plan(dir.path(), "plan.yaml", SCHEMA_PLAN);

    assert_cmd::cargo::cargo_bin_cmd!("context-assert")
        .env_remove("RUST_LOG")
        .args(["check", "--context", "nightly import", "--detail", "", "--plan"])
        .arg(&plan)
        .write_stdin(SCHEMA_DEFS)
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "assertion context is 'nightly import' -- fieldId: 'lastName' is repeated",
        ));
}

#[test]
fn csv_headers_become_record_keys() {
    let dir = tempdir().expect("tempdir");
    let plan = write_plan(
        dir.path(),
        "plan.json",
        r#"{"checks": [{"check": "optional_record_label", "field": "colLabel"}]}"#,
    );

    assert_cmd::cargo::cargo_bin_cmd!("context-assert")
        .env_remove("RUST_LOG")
        .args(["check", "--from", "csv", "--plan"])
        .arg(&plan)
        .write_stdin("fieldId,colLabel\nfirstName,First  Name\n")
        .assert()
        .code(2)
        .stdout(predicate::str::contains(r#""reason":"consecutive_spaces""#));
}

#[test]
fn csv_repeated_header_is_input_usage_error() {
    let dir = tempdir().expect("tempdir");
    let plan = write_plan(
        dir.path(),
        "plan.json",
        r#"{"checks": [{"check": "optional_record_label", "field": "colLabel"}]}"#,
    );

    assert_cmd::cargo::cargo_bin_cmd!("context-assert")
        .env_remove("RUST_LOG")
        .args(["check", "--from", "csv", "--plan"])
        .arg(&plan)
        .write_stdin("colLabel,colLabel\nFirst,Second\n")
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "csv header 'colLabel' appears more than once",
        ));
}

#[test]
fn missing_plan_file_is_input_usage_error() {
    let dir = tempdir().expect("tempdir");

    assert_cmd::cargo::cargo_bin_cmd!("context-assert")
        .env_remove("RUST_LOG")
        .args(["check", "--plan"])
        .arg(dir.path().join("absent.json"))
        .write_stdin("[]")
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(r#""error":"input_usage_error""#));
}

#[test]
fn empty_collection_fails_record_checks() {
    let dir = tempdir().expect("tempdir");
    let plan = write_plan(
        dir.path(),
        "plan.json",
        r#"{"checks": [{"check": "record_property", "field": "x"}]}"#,
    );

    let response = run_with_stdin(
        &CheckCommandArgs {
            input: None,
            from: None,
            plan,
            context: None,
            detail: None,
        },
        std::io::Cursor::new("[]"),
    );
    assert_eq!(response.exit_code, 2);
    assert_eq!(response.payload["failure"]["kind"], json!("empty_array"));
}
