#![cfg(feature = "cli")]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "typeprims-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn typeprims(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_typeprims"))
        .env_remove("TYPEPRIMS_SCHEMA_DIR")
        .env_remove("TYPEPRIMS_LOG")
        .args(["--log-level", "error", "--format", "json"])
        .args(args)
        .output()
        .expect("typeprims should run")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn write_schema(dir: &Path, file_name: &str, contents: &str) {
    std::fs::write(dir.join(file_name), contents).expect("schema should be writable");
}

#[test]
fn check_reports_conformance_and_exit_code() {
    let ok = typeprims(&["check", "--type", "number", "--json", "5"]);
    assert_eq!(ok.status.code(), Some(0));
    assert_eq!(stdout_json(&ok)["valid"], true);

    let bad = typeprims(&["check", "--type", "number", "--data", "five"]);
    assert_eq!(bad.status.code(), Some(60));
    assert_eq!(stdout_json(&bad)["valid"], false);
}

#[test]
fn validate_explains_failure() {
    let output = typeprims(&["validate", "--type", "number", "--data", "x"]);
    assert_eq!(output.status.code(), Some(60));

    let json = stdout_json(&output);
    assert_eq!(json["valid"], false);
    let error = json["error"].as_str().expect("error should be a string");
    assert!(error.starts_with("\"x\" of type 'string' is an invalid value for expected type 'number'"));
}

#[test]
fn validate_union_and_param() {
    let union = typeprims(&["validate", "--type", "string,number", "--json", "5"]);
    assert_eq!(union.status.code(), Some(0));

    let param = typeprims(&[
        "validate", "--type", "number", "--param", "foo", "--data", "x",
    ]);
    assert_eq!(param.status.code(), Some(60));
    let json = stdout_json(&param);
    assert_eq!(json["param"], "foo");
    assert!(json["error"]
        .as_str()
        .expect("error should be a string")
        .starts_with("foo: "));
}

#[test]
fn param_with_union_is_usage_error() {
    let output = typeprims(&[
        "validate", "--type", "string,number", "--param", "foo", "--json", "1",
    ]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn unknown_type_is_usage_error() {
    let output = typeprims(&["check", "--type", "nope", "--json", "1"]);
    assert_eq!(output.status.code(), Some(64));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown type 'nope'"));
}

#[test]
fn schema_directory_types_are_usable() {
    let dir = unique_temp_dir("schemas");
    write_schema(
        &dir,
        "user.schema.json",
        r#"{"type":"object","properties":{"id":{"type":"integer"}},"required":["id"]}"#,
    );
    let dir_arg = dir.to_str().expect("temp dir should be UTF-8");

    let listed = typeprims(&["types", "--schemas", dir_arg]);
    assert_eq!(listed.status.code(), Some(0));
    let rows = stdout_json(&listed);
    let user = rows
        .as_array()
        .expect("types output should be a list")
        .iter()
        .find(|row| row["name"] == "user")
        .expect("user type should be listed");
    assert_eq!(user["origin"], "schema");

    let ok = typeprims(&[
        "validate", "--schemas", dir_arg, "--type", "user", "--json", r#"{"id":1}"#,
    ]);
    assert_eq!(ok.status.code(), Some(0));

    let strict = typeprims(&[
        "check",
        "--schemas",
        dir_arg,
        "--strict",
        "--type",
        "user",
        "--json",
        r#"{"id":1,"extra":true}"#,
    ]);
    assert_eq!(strict.status.code(), Some(60));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn version_prints_package_version() {
    let output = typeprims(&["version"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("typeprims {}", env!("CARGO_PKG_VERSION")));
}
