//! `argus status` output in human and JSON form.

#![allow(clippy::expect_used, clippy::unwrap_used)]

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

#[test]
fn test_status_human_reports_controller_mode_by_default() {
    let dir = TempDir::new().expect("tempdir");
    argus(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("controller"))
        .stdout(predicate::str::contains("missing"));
}

#[test]
fn test_status_human_reports_legacy_mode_when_file_exists() {
    let dir = TempDir::new().expect("tempdir");
    let user = dir.path().join("user");
    std::fs::create_dir_all(&user).unwrap();
    std::fs::write(user.join("allow-legacy-pull"), b"").unwrap();

    argus(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("legacy pull (ON)"));
}

#[test]
fn test_status_json_is_valid_and_carries_settings() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(
        dir.path().join("argus.yaml"),
        "system:\n  controller:\n    detect_proxy: true\n",
    )
    .unwrap();

    let output = argus(&dir)
        .args(["status", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid json");

    assert_eq!(parsed["modus"], "service");
    assert_eq!(parsed["legacy_pull"], false);
    assert_eq!(parsed["controller"]["packaged"], false);
    assert_eq!(parsed["controller"]["settings"]["detect_proxy"], true);
    assert_eq!(parsed["controller"]["settings"]["on_crash"], "ignore");
}

#[test]
fn test_status_json_reports_pinned_channel_in_integration_modus() {
    let dir = TempDir::new().expect("tempdir");
    // A configured host:port is ignored when the modus pins the internal
    // port; only the mailslot sentinel would win over the pin.
    std::fs::write(
        dir.path().join("argus.yaml"),
        "system:\n  controller:\n    channel: \"collector.example:8559\"\n",
    )
    .unwrap();
    let output = argus(&dir)
        .args(["status", "--json", "--modus", "integration"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid json");

    assert_eq!(parsed["channel"], "ip/localhost:50001");
    assert_eq!(parsed["channel_port"], 50001);
}
