use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Helper to create a Command for the mcheck binary
#[allow(deprecated)]
fn mcheck() -> Command {
    let mut cmd = Command::cargo_bin("mcheck").expect("Failed to find mcheck binary");
    cmd.env_remove("MCHECK_LOG");
    cmd
}

fn json_stdout(output: &[u8]) -> serde_json::Value {
    let output_str = String::from_utf8_lossy(output);
    serde_json::from_str(&output_str)
        .unwrap_or_else(|e| panic!("Output should be valid JSON ({}): {}", e, output_str))
}

// ============================================================================
// check command tests
// ============================================================================

#[test]
fn test_check_valid_schema() {
    mcheck()
        .arg("check")
        .arg(fixture_path("test_doc.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Schema is valid"))
        .stdout(predicate::str::contains("TestDoc"))
        .stdout(predicate::str::contains("language: string (choices: en|de)"))
        .stdout(predicate::str::contains("first_name: string (required, dirty, length: [1, -])"))
        .stdout(predicate::str::contains("info: list<string>"));
}

#[test]
fn test_check_toml_schema() {
    mcheck()
        .arg("check")
        .arg(fixture_path("test_doc.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("other: model<Other>"));
}

#[test]
fn test_check_json_output() {
    let output = mcheck()
        .arg("check")
        .arg("--format")
        .arg("json")
        .arg(fixture_path("test_doc.yml"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary = json_stdout(&output);
    assert_eq!(summary["name"], "TestDoc");
    assert_eq!(summary["fields"].as_array().map(Vec::len), Some(3));
    assert_eq!(summary["fields"][1]["required"], true);
    assert_eq!(summary["fields"][2]["model"]["name"], "Other");
}

#[test]
fn test_check_shows_list_element_models() {
    mcheck()
        .arg("check")
        .arg(fixture_path("order.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("lines: list<model<Line>> (length: [1, -])"))
        .stdout(predicate::str::contains("- sku: string (required)"))
        .stdout(predicate::str::contains("- quantity: integer (range: [1, -])"));
}

#[test]
fn test_check_json_includes_list_element_models() {
    let output = mcheck()
        .arg("check")
        .arg("--format")
        .arg("json")
        .arg(fixture_path("order.yml"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary = json_stdout(&output);
    assert_eq!(summary["fields"][1]["model"]["name"], "Line");
    assert_eq!(summary["fields"][1]["model"]["fields"][0]["name"], "sku");
}

#[test]
fn test_check_invalid_schema() {
    mcheck()
        .arg("check")
        .arg(fixture_path("invalid_schema.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("language"));
}

#[test]
fn test_check_missing_file() {
    mcheck()
        .arg("check")
        .arg("nonexistent.yml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_check_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let empty_file = temp_dir.path().join("empty.yml");
    fs::write(&empty_file, "").unwrap();

    mcheck()
        .arg("check")
        .arg(empty_file.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

// ============================================================================
// validate command tests
// ============================================================================

#[test]
fn test_validate_valid_instance() {
    mcheck()
        .arg("validate")
        .arg(fixture_path("test_doc.yml"))
        .arg(fixture_path("doc_valid.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation OK"));
}

#[test]
fn test_validate_invalid_instance() {
    mcheck()
        .arg("validate")
        .arg(fixture_path("test_doc.yml"))
        .arg(fixture_path("doc_invalid.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Validation FAILED"))
        .stdout(predicate::str::contains("FIELD_TYPE_CHECK on field 'language'"))
        .stdout(predicate::str::contains("other.info[1]"));
}

#[test]
fn test_validate_json_output_ok() {
    let output = mcheck()
        .arg("validate")
        .arg("--format")
        .arg("json")
        .arg(fixture_path("test_doc.toml"))
        .arg(fixture_path("doc_valid.json"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report = json_stdout(&output);
    assert_eq!(report["tag"], "OK");
    assert_eq!(report["errors"], serde_json::json!([]));
    assert_eq!(report["summary"]["models_validated"], 2);
}

#[test]
fn test_validate_json_output_failed() {
    let output = mcheck()
        .arg("validate")
        .arg("--format")
        .arg("json")
        .arg(fixture_path("test_doc.yml"))
        .arg(fixture_path("doc_invalid.json"))
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report = json_stdout(&output);
    assert_eq!(report["tag"], "FAILED");
    assert_eq!(report["summary"]["error_count"], 3);
    assert_eq!(report["errors"][0]["kind"], "FIELD_TYPE_CHECK");
    assert_eq!(report["errors"][0]["field_name"], "language");
    assert_eq!(report["errors"][1]["field_name"], "first_name");
}

#[test]
fn test_validate_missing_required_field() {
    let temp_dir = TempDir::new().unwrap();
    let doc = temp_dir.path().join("doc.json");
    fs::write(&doc, r#"{"language": "en"}"#).unwrap();

    mcheck()
        .arg("validate")
        .arg(fixture_path("test_doc.yml"))
        .arg(doc.to_str().unwrap())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FIELD_REQUIRED on field 'first_name'"));
}

#[test]
fn test_validate_dirty_null_passes() {
    let temp_dir = TempDir::new().unwrap();
    let doc = temp_dir.path().join("doc.yaml");
    fs::write(&doc, "language: de\nfirst_name: null\n").unwrap();

    mcheck()
        .arg("validate")
        .arg(fixture_path("test_doc.yml"))
        .arg(doc.to_str().unwrap())
        .assert()
        .success();
}

#[test]
fn test_validate_unknown_field() {
    mcheck()
        .arg("validate")
        .arg(fixture_path("test_doc.yml"))
        .arg(fixture_path("doc_unknown_field.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse instance file"));
}

#[test]
fn test_validate_missing_instance() {
    mcheck()
        .arg("validate")
        .arg(fixture_path("test_doc.yml"))
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_validate_with_invalid_format() {
    mcheck()
        .arg("validate")
        .arg("--format")
        .arg("invalid_format")
        .arg(fixture_path("test_doc.yml"))
        .arg(fixture_path("doc_valid.json"))
        .assert()
        .failure();
}

#[test]
fn test_verbose_logs_to_stderr() {
    mcheck()
        .arg("--verbose")
        .arg("check")
        .arg(fixture_path("test_doc.yml"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Parsing schema file"));
}

// ============================================================================
// General CLI tests
// ============================================================================

#[test]
fn test_cli_help() {
    mcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_cli_version() {
    mcheck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_validate_help() {
    mcheck()
        .arg("validate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("schema"))
        .stdout(predicate::str::contains("instance"))
        .stdout(predicate::str::contains("format"));
}
