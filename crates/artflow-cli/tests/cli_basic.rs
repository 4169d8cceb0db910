//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data directory
//! and verify outputs.

use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "artflow-cli", "--"])
        .args(args)
        .env("ARTFLOW_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn unique_email() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("cli-test-{}-{}@example.com", std::process::id(), nanos)
}

#[test]
fn test_activity_list() {
    let (stdout, _, code) = run_cli(&["activity", "list"]);
    assert_eq!(code, 0, "activity list failed");

    let catalog: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(catalog.as_array().unwrap().len(), 6);
    assert!(stdout.contains("Mandala Patterns"));
}

#[test]
fn test_config_get() {
    let (stdout, _, code) = run_cli(&["config", "get", "ui.dark_mode"]);
    assert_eq!(code, 0, "config get failed");
    assert!(stdout.contains("true") || stdout.contains("false"));
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_, _, code) = run_cli(&["config", "get", "ui.no_such_key"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    assert!(stdout.contains("timer"));
    assert!(stdout.contains("tracking"));
}

#[test]
fn test_signup_rejects_short_password() {
    let (_, stderr, code) = run_cli(&["auth", "signup", "--email", &unique_email(), "--password", "short"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("at least"));
}

#[test]
fn test_signup_rejects_bad_email() {
    let (_, _, code) = run_cli(&["auth", "signup", "--email", "not-an-email", "--password", "long enough"]);
    assert_ne!(code, 0);
}

#[test]
fn test_full_activity_flow() {
    let email = unique_email();

    let (stdout, stderr, code) =
        run_cli(&["auth", "signup", "--email", &email, "--password", "long enough"]);
    assert_eq!(code, 0, "signup failed: {stderr}");
    assert!(stdout.contains("signed_up"));

    let (_, _, code) = run_cli(&["anxiety", "set", "7"]);
    assert_eq!(code, 0, "anxiety set failed");

    let (stdout, _, code) = run_cli(&["activity", "start", "Mandala Patterns"]);
    assert_eq!(code, 0, "activity start failed");
    assert!(stdout.contains("ActivitySelected"));

    let (_, stderr, code) = run_cli(&["timer", "select", "42"]);
    assert_ne!(code, 0, "non-preset duration was accepted");
    assert!(stderr.contains("preset"));

    let (_, _, code) = run_cli(&["timer", "select", "300"]);
    assert_eq!(code, 0, "timer select failed");

    let (_, _, code) = run_cli(&["timer", "toggle"]);
    assert_eq!(code, 0, "timer toggle failed");

    let (stdout, _, code) = run_cli(&["timer", "tick", "--count", "120"]);
    assert_eq!(code, 0, "timer tick failed");
    assert!(stdout.contains("\"elapsed_secs\": 120"));

    let (stdout, _, code) = run_cli(&["session", "finish"]);
    assert_eq!(code, 0, "session finish failed");
    assert!(stdout.contains("SessionRecorded"));
    assert!(stdout.contains("\"duration_secs\": 120"));

    let (stdout, _, code) = run_cli(&["stats", "summary"]);
    assert_eq!(code, 0, "stats summary failed");
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(summary["sessions"].as_u64().unwrap() >= 1);

    let (stdout, _, code) = run_cli(&["session", "list"]);
    assert_eq!(code, 0, "session list failed");
    assert!(stdout.contains("Mandala Patterns"));

    let (_, _, code) = run_cli(&["auth", "signout"]);
    assert_eq!(code, 0, "signout failed");

    let (stdout, stderr, code) =
        run_cli(&["auth", "signin", "--email", &email, "--password", "long enough"]);
    assert_eq!(code, 0, "signin failed: {stderr}");
    assert!(stdout.contains("signed_in"));

    let (stdout, _, code) = run_cli(&["auth", "whoami"]);
    assert_eq!(code, 0, "whoami failed");
    assert!(stdout.contains(&email));
}
