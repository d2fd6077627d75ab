//! CLI structure and argument parsing.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn argus(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("argus"));
    cmd.env("NO_COLOR", "1");
    cmd.env("ARGUS_ROOT_DIR", dir.path().join("root"));
    cmd.env("ARGUS_USER_DIR", dir.path().join("user"));
    cmd.env("ARGUS_CONFIG", dir.path().join("argus.yaml"));
    cmd.env_remove("ARGUS_MODUS");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    let dir = TempDir::new().expect("tempdir");
    // clap with arg_required_else_help shows help on stderr and exits 2
    argus(&dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("controller lifecycle supervision"));
}

#[test]
fn test_cli_help_flag_shows_help() {
    let dir = TempDir::new().expect("tempdir");
    argus(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    let dir = TempDir::new().expect("tempdir");
    argus(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("argus"));
}

#[test]
fn test_version_command_shows_agent_version() {
    let dir = TempDir::new().expect("tempdir");
    argus(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            "argus ",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_command_json_outputs_version_field() {
    let dir = TempDir::new().expect("tempdir");
    argus(&dir)
        .arg("version")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""version""#));
}

// --- Command hierarchy tests ---

#[test]
fn test_help_shows_lifecycle_commands() {
    let dir = TempDir::new().expect("tempdir");
    for command in ["start", "stop", "status", "reconcile", "version"] {
        argus(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains(command));
    }
}

#[test]
fn test_invalid_modus_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    argus(&dir)
        .args(["status", "--modus", "daemon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// --- Modus gating through the binary ---

#[test]
fn test_start_in_app_modus_reports_not_started() {
    let dir = TempDir::new().expect("tempdir");
    argus(&dir)
        .args(["start", "--modus", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Controller not started"));
}

#[test]
fn test_stop_in_app_modus_reports_unmanaged() {
    let dir = TempDir::new().expect("tempdir");
    argus(&dir)
        .args(["stop", "--modus", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not managed in this modus"));
}

#[test]
fn test_start_honors_controller_run_gate() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(
        dir.path().join("argus.yaml"),
        "system:\n  controller:\n    run: false\n",
    )
    .expect("write config");
    argus(&dir)
        .arg("start")
        .assert()
        .success()
        .stdout(predicate::str::contains("disabled in configuration"));
}
