//! Tests for CLI argument parsing against the built binary.
//!
//! Only paths that exit before the terminal is taken over are exercised.

use std::process::Command;

fn lifeterm_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lifeterm"))
}

#[test]
fn test_help_lists_options() {
    let output = lifeterm_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--seed", "--density", "--tick-ms", "--step-mode", "--pattern", "--config"] {
        assert!(stdout.contains(flag), "missing {} in help: {}", flag, stdout);
    }
}

#[test]
fn test_invalid_density_exits_with_error() {
    let output = lifeterm_cmd()
        .args(["--density", "2.5"])
        .env("XDG_CONFIG_HOME", env!("CARGO_TARGET_TMPDIR"))
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Config validation failed: density must be between 0 and 1"),
        "got: {}",
        stderr
    );
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let output = lifeterm_cmd()
        .args(["--config", "/nonexistent/lifeterm.toml"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config file"), "got: {}", stderr);
}

#[test]
fn test_unknown_pattern_is_usage_error() {
    let output = lifeterm_cmd()
        .args(["--pattern", "spaceship"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value"), "got: {}", stderr);
}

#[test]
fn test_pattern_and_seed_conflict() {
    let output = lifeterm_cmd()
        .args(["--pattern", "glider", "--seed", "3"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be used with"), "got: {}", stderr);
}
