//! Integration tests driving the loop-params binary.

use serde_json::{json, Value};
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn command(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_loop-params"));
    cmd.env_remove("LOOP_PARAMS_LOG")
        .env_remove("LOOP_PARAMS_LOG_FORMAT")
        .env_remove("LOOP_PARAMS_LOG_OUTPUT")
        .env_remove("LOOP_PARAMS_LOG_MODULES")
        .env_remove("LOOP_PARAMS__CONTEXT__CURRENT_ITEM_ID")
        .args(args);
    cmd
}

fn run(args: &[&str]) -> std::process::Output {
    command(args).output().unwrap()
}

#[test]
fn test_build_prints_query_args() {
    let temp_dir = TempDir::new().unwrap();
    let custom = temp_dir.path().join("custom.json");
    let defaults = temp_dir.path().join("defaults.json");
    fs::write(
        &custom,
        r#"{"exclude_current": true, "post_parent": "my-theme//single", "date_query": {"range": "last-month"}}"#,
    )
    .unwrap();
    fs::write(&defaults, r#"{"post_type": "post"}"#).unwrap();

    let output = run(&[
        "build",
        "--custom",
        custom.to_str().unwrap(),
        "--defaults",
        defaults.to_str().unwrap(),
        "--current-item",
        "42",
        "--today",
        "2024-03-10",
    ]);
    assert!(
        output.status.success(),
        "build should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["post__not_in"], json!([42]));
    assert_eq!(parsed["post_parent"], json!(42));
    assert_eq!(
        parsed["date_query"],
        json!([{"after": "2024-02-01", "before": "2024-02-29", "inclusive": false}])
    );
    assert!(parsed.get("post_type").is_none());
}

#[test]
fn test_build_uses_config_context() {
    let temp_dir = TempDir::new().unwrap();
    let custom = temp_dir.path().join("custom.json");
    let config = temp_dir.path().join("loop-params.toml");
    fs::write(&custom, r#"{"exclude_current": true}"#).unwrap();
    fs::write(&config, "[context]\ncurrent_item_id = 5\n").unwrap();

    let output = run(&[
        "--config",
        config.to_str().unwrap(),
        "build",
        "--custom",
        custom.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["post__not_in"], json!([5]));
}

#[test]
fn test_build_rejects_invalid_json() {
    let temp_dir = TempDir::new().unwrap();
    let custom = temp_dir.path().join("custom.json");
    fs::write(&custom, "{not json").unwrap();

    let output = run(&["build", "--custom", custom.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("JSON error"));
}

#[test]
fn test_rules_command() {
    let output = run(&["rules"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names.first(), Some(&"multiple_posts"));
    assert_eq!(names.last(), Some(&"post_parent"));
    assert_eq!(names.len(), 8);
}

#[test]
fn test_env_overrides_config_file_context() {
    let temp_dir = TempDir::new().unwrap();
    let custom = temp_dir.path().join("custom.json");
    let config = temp_dir.path().join("loop-params.toml");
    fs::write(&custom, r#"{"exclude_current": true}"#).unwrap();
    fs::write(&config, "[context]\ncurrent_item_id = 5\n").unwrap();

    let output = command(&[
        "--config",
        config.to_str().unwrap(),
        "build",
        "--custom",
        custom.to_str().unwrap(),
    ])
    .env("LOOP_PARAMS__CONTEXT__CURRENT_ITEM_ID", "9")
    .output()
    .unwrap();
    assert!(
        output.status.success(),
        "build should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["post__not_in"], json!([9]));
}

#[test]
fn test_log_format_env_emits_json_lines() {
    let output = command(&["--log-level", "info", "rules"])
        .env("LOOP_PARAMS_LOG_FORMAT", "json")
        .env("LOOP_PARAMS_LOG_OUTPUT", "stderr")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let events: Vec<Value> = stderr
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert!(
        events
            .iter()
            .any(|event| event["fields"]["message"] == json!("loop-params starting")),
        "expected a JSON startup event; got: {}",
        stderr
    );

    // Logs go to stderr, stdout only carries the command output.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().next(), Some("multiple_posts"));
}

#[test]
fn test_invalid_log_output_env_rejected() {
    let output = command(&["rules"])
        .env("LOOP_PARAMS_LOG_OUTPUT", "syslog")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to initialize logging"));
    assert!(stderr.contains("Invalid log output: syslog"));
}

#[test]
fn test_build_reads_custom_params_from_stdin() {
    let mut child = command(&["build", "--custom", "-", "--current-item", "31"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"{"post_parent": "my-theme//page", "disable_pagination": true}"#)
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(
        output.status.success(),
        "build should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["post_parent"], json!(31));
    assert_eq!(parsed["nopaging"], json!(true));
}
