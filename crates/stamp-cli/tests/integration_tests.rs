//! Integration tests for the `stamp` binary.

use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `stamp` with HOME and git configuration isolated inside `home`.
fn stamp(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stamp").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env_remove("GIT_CONFIG_GLOBAL")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

fn git_available() -> bool {
    StdCommand::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|out| out.status.success())
}

fn git(dir: &Path, args: &[&str]) {
    let status = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("HOME", dir)
        .status()
        .unwrap();
    assert!(status.success(), "git {args:?} failed");
}

#[test]
fn test_help_flag() {
    let home = TempDir::new().unwrap();
    stamp(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("identity"))
        .stdout(predicate::str::contains("normalize"));
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    stamp(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_normalize_plain() {
    let home = TempDir::new().unwrap();
    stamp(home.path())
        .args(["normalize", "ACME", "Co."])
        .assert()
        .success()
        .stdout(predicate::str::contains("acme-co"))
        .stdout(predicate::str::contains("AcmeCo."));
}

#[test]
fn test_normalize_json() {
    let home = TempDir::new().unwrap();
    let out = stamp(home.path())
        .args(["normalize", "my_cool-package", "--output-format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["slug"], "my-cool-package");
    assert_eq!(json["title"], "MyCoolPackage");
}

#[test]
fn test_config_get_default_host() {
    let home = TempDir::new().unwrap();
    stamp(home.path())
        .args(["config", "get", "provider.host"])
        .assert()
        .success()
        .stdout(predicate::str::diff("github.com\n"));
}

#[test]
fn test_config_env_override() {
    let home = TempDir::new().unwrap();
    stamp(home.path())
        .env("STAMP_PROVIDER__HOST", "git.example.org")
        .args(["config", "get", "provider.host"])
        .assert()
        .success()
        .stdout(predicate::str::contains("git.example.org"));
}

#[test]
fn test_config_file_override() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.toml");
    std::fs::write(&path, "[lookup]\nenabled = false\n")
        .unwrap();

    stamp(home.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "lookup.enabled"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));
}

#[test]
fn test_config_path() {
    let home = TempDir::new().unwrap();
    stamp(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    stamp(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stamp"));
}

#[test]
fn test_identity_offline_outside_repository() {
    let home = TempDir::new().unwrap();
    let out = stamp(home.path())
        .args(["identity", "--offline", "--output-format", "json", "--dir"])
        .arg(home.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert!(json["author"]["name"].is_string());
    assert!(json["author"]["handle"].is_string());
    assert!(json["vendor"]["slug"].is_string());
    assert!(json["vendor"]["namespace"].is_string());
}

#[test]
fn test_identity_offline_uses_git_config() {
    if !git_available() {
        return;
    }
    let repo = TempDir::new().unwrap();
    git(repo.path(), &["init", "-q"]);
    git(repo.path(), &["config", "user.name", "Alice Example"]);
    git(repo.path(), &["config", "user.email", "alice@example.com"]);
    git(
        repo.path(),
        &["remote", "add", "origin", "git@github.com:acme/widgets.git"],
    );

    let out = stamp(repo.path())
        .args(["identity", "--offline", "--output-format", "json", "--dir"])
        .arg(repo.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["author"]["name"], "Alice Example");
    assert_eq!(json["author"]["email"], "alice@example.com");
    // Offline: the vendor is the author.
    assert_eq!(json["vendor"]["display_name"], "Alice Example");
    assert_eq!(json["vendor"]["slug"], "alice-example");
    assert_eq!(json["vendor"]["namespace"], "AliceExample");
}

#[test]
fn test_init_writes_config() {
    let home = TempDir::new().unwrap();
    stamp(home.path()).arg("init").assert().success();

    stamp(home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
