//! Tests for the headless `play` command, run against the real binary.

use std::process::Command;

fn cmd() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_counter-patterns"));
    // Keep the user's config file out of the picture.
    command.arg("--config").arg("/nonexistent/counter-patterns.toml");
    command
}

#[test]
fn test_help_lists_modes() {
    let output = cmd().arg("--help").output().expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--mode"));
    assert!(stdout.contains("comp-injection-on-each"));
}

#[test]
fn test_play_hook_sequence() {
    let output = cmd()
        .args(["--mode", "hook", "play", "++-"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "hook: 0 1 2 1\n");
}

#[test]
fn test_play_all_modes_agree() {
    let output = cmd()
        .args(["play", "-+--", "--all"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "render-prop: 0 -1 0 -1 -2",
            "comp-injection: 0 -1 0 -1 -2",
            "comp-injection-on-each: 0,0,0,0 -1,-1,-1,-1 0,0,0,0 -1,-1,-1,-1 -2,-2,-2,-2",
            "hook: 0 -1 0 -1 -2",
        ]
    );
}

#[test]
fn test_play_scaled_instances_as_json() {
    let output = cmd()
        .args([
            "--mode",
            "comp-injection-on-each",
            "--transform",
            "scale-by-index",
            "play",
            "++",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["mode"], "comp-injection-on-each");
    assert_eq!(value["renders"][2], serde_json::json!([0, 2, 4, 6]));
}

#[test]
fn test_invalid_step_exits_with_error() {
    let output = cmd()
        .args(["play", "+x"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: invalid step 'x' at position 2"));
}

#[test]
fn test_out_of_range_instances_rejected() {
    let output = cmd()
        .args(["-n", "0", "play", "+"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("patterns.instances"));
}

#[test]
fn test_unknown_mode_rejected_by_clap() {
    let output = cmd()
        .args(["--mode", "render_prop", "play", "+"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value"));
}

#[test]
fn test_log_flag_writes_unique_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let base = dir.path().join("run.log");

    let output = cmd()
        .arg("--log")
        .arg(&base)
        .args(["play", "+"])
        .env_remove("COUNTER_PATTERNS_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let logs: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(logs.len(), 1, "{logs:?}");
    assert!(logs[0].starts_with("run.log."));

    let content = std::fs::read_to_string(dir.path().join(&logs[0])).unwrap();
    assert!(content.contains("counter-patterns starting"));
}
