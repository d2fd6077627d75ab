//! `argus reconcile` against a real temporary layout.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Layout {
    _dir: TempDir,
    root: PathBuf,
    user: PathBuf,
    config: PathBuf,
}

fn setup() -> Layout {
    let dir = TempDir::new().expect("tempdir");
    let root = dir.path().join("root");
    let user = dir.path().join("user");
    let config = dir.path().join("argus.yaml");
    std::fs::create_dir_all(root.join("pkg")).unwrap();
    std::fs::create_dir_all(&user).unwrap();
    Layout {
        _dir: dir,
        root,
        user,
        config,
    }
}

fn packaged_controller(l: &Layout) -> PathBuf {
    #[cfg(windows)]
    let name = "argus-controllerd.exe";
    #[cfg(not(windows))]
    let name = "argus-controllerd";
    l.root.join("pkg").join(name)
}

fn argus(l: &Layout) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("argus"));
    cmd.env("NO_COLOR", "1");
    cmd.env("ARGUS_ROOT_DIR", &l.root);
    cmd.env("ARGUS_USER_DIR", &l.user);
    cmd.env("ARGUS_CONFIG", &l.config);
    cmd.env_remove("ARGUS_MODUS");
    cmd
}

#[test]
fn test_fresh_install_pass_creates_legacy_and_flag_files() {
    let l = setup();
    std::fs::write(packaged_controller(&l), b"controller").unwrap();
    let marker = l.user.join("uninstall.marker");

    argus(&l)
        .arg("reconcile")
        .assert()
        .success()
        .stdout(predicate::str::contains("Legacy pull file created"));

    assert!(l.user.join("allow-legacy-pull").exists());
    assert!(l.user.join("controller-flag").exists());
    assert!(!marker.exists());
}

#[test]
fn test_modern_marker_pass_creates_flag_only() {
    let l = setup();
    std::fs::write(packaged_controller(&l), b"controller").unwrap();
    let marker = l.user.join("uninstall.marker");
    std::fs::write(&marker, "argus-setup/2.1.0\n").unwrap();

    argus(&l)
        .arg("reconcile")
        .assert()
        .success()
        .stdout(predicate::str::contains("not needed"));

    assert!(!l.user.join("allow-legacy-pull").exists());
    assert!(l.user.join("controller-flag").exists());
    assert!(!marker.exists(), "marker must be consumed");
}

#[test]
fn test_without_controller_marker_is_still_consumed() {
    let l = setup();
    let marker = l.user.join("uninstall.marker");
    std::fs::write(&marker, "whatever\n").unwrap();

    argus(&l)
        .arg("reconcile")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to reconcile"));

    assert!(!marker.exists());
    assert!(!l.user.join("controller-flag").exists());
}

#[test]
fn test_explicit_marker_path_is_honored() {
    let l = setup();
    std::fs::write(packaged_controller(&l), b"controller").unwrap();
    let marker = l.user.join("custom.marker");
    std::fs::write(&marker, "pre-controller installer\n").unwrap();

    argus(&l)
        .args(["reconcile", "--marker"])
        .arg(&marker)
        .assert()
        .success();

    assert!(!marker.exists());
    assert!(l.user.join("allow-legacy-pull").exists());
}

#[test]
fn test_force_legacy_config_rewrites_unconditionally() {
    let l = setup();
    std::fs::write(packaged_controller(&l), b"controller").unwrap();
    std::fs::write(l.user.join("controller-flag"), b"").unwrap();
    std::fs::write(
        &l.config,
        "system:\n  controller:\n    force_legacy: true\n",
    )
    .unwrap();

    argus(&l)
        .arg("reconcile")
        .assert()
        .success()
        .stdout(predicate::str::contains("forced by configuration"));

    assert!(l.user.join("allow-legacy-pull").exists());
}
