//! Integration tests for the treediff binary

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

use super::test_utils::{write, Fixture};

/// Run the binary with an isolated config home and cwd.
fn run(cwd: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_treediff");
    let home = TempDir::new().unwrap();
    Command::new(bin)
        .current_dir(cwd)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env_remove("TREEDIFF_LOG")
        .args(args)
        .output()
        .expect("run treediff")
}

fn fixture() -> Fixture {
    let fixture = Fixture::new();
    write(&fixture.a, "a.txt", "X");
    write(&fixture.b, "a.txt", "Y");
    write(&fixture.b, "b.txt", "new");
    fixture
}

#[test]
fn test_compare_json_output() {
    let fixture = fixture();
    let output = run(
        &fixture.a,
        &["compare", &fixture.a_str(), &fixture.b_str(), "--format", "json"],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["tree1"]["children"][0]["status"], "different");
    assert_eq!(value["tree2"]["children"][1]["name"], "b.txt");
    assert_eq!(value["tree2"]["children"][1]["status"], "missing");
    assert_eq!(value["tree1"]["children"].as_array().unwrap().len(), 1);
}

#[test]
fn test_compare_text_output() {
    let fixture = fixture();
    let output = run(
        &fixture.a,
        &["compare", &fixture.a_str(), &fixture.b_str(), "--mirror-missing"],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("a.txt [different]"));
    assert!(stdout.contains("b.txt [missing, absent]"));
    assert!(stdout.contains("b.txt [missing]"));
    // Not a terminal, so no escape codes
    assert!(!stdout.contains('\u{1b}'));
}

#[test]
fn test_logging_silent_by_default() {
    let fixture = fixture();
    let output = run(&fixture.a, &["compare", &fixture.a_str(), &fixture.b_str()]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let fixture = fixture();
    let output = run(
        &fixture.a,
        &["--verbose", "compare", &fixture.a_str(), &fixture.b_str(), "--summary-only"],
    );
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Comparison completed"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Comparison completed"));
}

#[test]
fn test_missing_directory_exits_nonzero() {
    let fixture = fixture();
    let missing = fixture.a.join("nope").display().to_string();
    let output = run(&fixture.a, &["compare", &missing, &fixture.b_str()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&format!("Directory 1 does not exist: {}", missing)));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_details_command() {
    let fixture = fixture();
    let output = run(
        &fixture.a,
        &["details", &fixture.a_str(), &fixture.b_str(), "b.txt", "--format", "json"],
    );
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["dir1"].is_null());
    assert_eq!(value["dir2"]["status"], "missing");
    assert_eq!(value["dir2"]["size"], 3);
}

#[test]
fn test_workspace_config_applies() {
    let fixture = fixture();
    let cwd = TempDir::new().unwrap();
    write(cwd.path(), ".treediff.toml", "[walker]\nignore_patterns = [\"b.txt\"]\n");

    let output = run(
        cwd.path(),
        &["compare", &fixture.a_str(), &fixture.b_str(), "--format", "json", "--summary-only"],
    );
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["missing"], 0);
    assert_eq!(value["different"], 2);
}

#[test]
fn test_invalid_config_file_rejected() {
    let fixture = fixture();
    let cwd = TempDir::new().unwrap();
    write(cwd.path(), "bad.toml", "[logging]\noutput = \"both\"\n");
    let config = cwd.path().join("bad.toml").display().to_string();

    let output = run(
        cwd.path(),
        &["--config", &config, "compare", &fixture.a_str(), &fixture.b_str()],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Configuration error"));
}
