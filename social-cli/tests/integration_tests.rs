//! Integration tests for the social CLI
//!
//! Tests end-to-end command behavior using the CLI binary.
//! Uses tempfile for isolated working directories.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Get the path to the social binary (built by cargo)
fn social_binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_social"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run social with the given args in the specified directory
fn run_social(dir: &Path, args: &[&str]) -> Output {
    social_binary()
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute social command")
}

/// Run social with `input` piped to stdin
fn run_social_with_stdin(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = social_binary()
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn social command");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for social")
}

/// Get stdout as string
fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as string
fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn write_script(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write script");
    path
}

const SCENARIO: &str = "\
add_user Alice
add_user Bob
add_user Carol
add_friend Alice Bob
add_friend Bob Carol
shortest_path Alice Carol
recommend Alice
";

fn json_lines(output: &Output) -> Vec<serde_json::Value> {
    stdout(output)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad JSON {:?}: {}", l, e)))
        .collect()
}

// ============================================================================
// Run Command Tests
// ============================================================================

#[test]
fn test_run_scenario_table() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_script(temp_dir.path(), "net.txt", SCENARIO);

    let output = run_social(temp_dir.path(), &["run", "net.txt"]);
    assert!(output.status.success(), "run failed: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Alice joined the network!"));
    assert!(out.contains("Alice and Bob are now friends!"));
    assert!(out.contains("START"));
    assert!(out.contains("2 hops"));
    assert!(out.contains("Suggestions for"));
    assert!(out.contains("Carol"));
}

#[test]
fn test_run_scenario_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_script(temp_dir.path(), "net.txt", SCENARIO);

    let output = run_social(temp_dir.path(), &["run", "net.txt", "--format", "json"]);
    assert!(output.status.success(), "run failed: {}", stderr(&output));

    let lines = json_lines(&output);
    assert_eq!(lines.len(), 7);

    let path = &lines[5];
    assert_eq!(path["kind"], "path");
    assert_eq!(path["status"], "found");
    assert_eq!(
        path["path"],
        serde_json::json!(["Alice", "Bob", "Carol"])
    );

    let recs = &lines[6];
    assert_eq!(recs["kind"], "recommendations");
    assert_eq!(recs["recommendations"][0]["name"], "Carol");
    assert_eq!(recs["recommendations"][0]["score"], 1);
}

#[test]
fn test_run_reports_failures_with_exit_code() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_script(
        temp_dir.path(),
        "net.txt",
        "add_user X\nadd_user X\nremove_friend X Y\nusers\n",
    );

    let output = run_social(temp_dir.path(), &["--format", "json", "run", "net.txt"]);
    assert!(!output.status.success(), "failing script should exit non-zero");
    assert!(stderr(&output).contains("2 of 4 command(s) failed"));

    let lines = json_lines(&output);
    assert_eq!(lines[1]["error"], "already_exists");
    assert_eq!(lines[1]["line"], 2);
    assert_eq!(lines[2]["error"], "not_found");
    assert_eq!(lines[3]["users"], serde_json::json!(["X"]));
}

#[test]
fn test_run_fail_fast() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_script(
        temp_dir.path(),
        "net.txt",
        "add_user X\nadd_friend X X\nadd_user Y\n",
    );

    let output = run_social(
        temp_dir.path(),
        &["--format", "json", "run", "--fail-fast", "net.txt"],
    );
    assert!(!output.status.success());

    let lines = json_lines(&output);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["error"], "self_friendship");
}

#[test]
fn test_run_from_stdin() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_social_with_stdin(
        temp_dir.path(),
        &["--format", "json", "run", "-"],
        "add_user A\nadd_user B\nshortest_path A B\n",
    );
    assert!(output.status.success(), "run - failed: {}", stderr(&output));

    let lines = json_lines(&output);
    assert_eq!(lines[2]["status"], "no_path");
}

#[test]
fn test_run_missing_script() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_social(temp_dir.path(), &["run", "nope.txt"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to open script"));
}

// ============================================================================
// Shell Command Tests
// ============================================================================

#[test]
fn test_shell_piped_session() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_social_with_stdin(
        temp_dir.path(),
        &["shell"],
        "add_user Alice\nshow_friends Alice\nshow_friends Bob\nquit\n",
    );
    assert!(output.status.success(), "shell failed: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Alice joined the network!"));
    assert!(out.contains("No friends yet."));
    assert!(out.contains("User not found: Bob"));
    // Not a terminal, so no prompt
    assert!(!out.contains("social> "));
}

// ============================================================================
// Exec Command Tests
// ============================================================================

#[test]
fn test_exec_add_user() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_social(temp_dir.path(), &["exec", "add_user", "Alice"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Alice joined the network!"));
}

#[test]
fn test_exec_errors() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_social(temp_dir.path(), &["exec", "show_friends", "Alice"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("User not found: Alice"));

    let output = run_social(temp_dir.path(), &["exec", "teleport", "Alice"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("Unknown command: teleport"));

    let output = run_social(temp_dir.path(), &["exec", "add_friend", "Alice"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("expects 2 argument(s), got 1"));
}

#[test]
fn test_exec_json_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_social(
        temp_dir.path(),
        &["--format", "json", "exec", "add_user", "  "],
    );
    assert!(!output.status.success());

    let value: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("error output should be JSON");
    assert_eq!(value["error"], "invalid_command");
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_config_sets_format_and_limit() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        temp_dir.path().join(".socialrc.toml"),
        "[output]\nformat = \"json\"\n\n[recommend]\nlimit = 1\n",
    )
    .unwrap();
    write_script(
        temp_dir.path(),
        "net.txt",
        "add_user me\nadd_user f\nadd_user b\nadd_user a\n\
         add_friend me f\nadd_friend f a\nadd_friend f b\nrecommend me\n",
    );

    let output = run_social(temp_dir.path(), &["run", "net.txt"]);
    assert!(output.status.success(), "run failed: {}", stderr(&output));

    let lines = json_lines(&output);
    let recs = lines.last().unwrap()["recommendations"]
        .as_array()
        .unwrap()
        .clone();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0]["name"], "a");
}

#[test]
fn test_format_flag_overrides_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        temp_dir.path().join(".socialrc.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = run_social(
        temp_dir.path(),
        &["--format", "table", "exec", "add_user", "Alice"],
    );
    assert!(output.status.success());
    assert!(stdout(&output).contains("SUCCESS:"));
}

#[test]
fn test_no_command_prints_help() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_social(temp_dir.path(), &[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Quick Start"));
}
