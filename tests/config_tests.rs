//! Integration tests for the config command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::jotbook_cmd;

#[test]
fn test_config_defaults_without_file() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("samples = true"))
        .stdout(predicate::str::contains("sort = date"))
        .stdout(predicate::str::contains("log_level = warn"));

    assert!(!temp.path().join(".jotbook").exists());
}

#[test]
fn test_config_set_writes_file() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .args(["config", "sort", "bookmark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set sort = bookmark"));

    let content = fs::read_to_string(temp.path().join(".jotbook/config.toml")).unwrap();
    assert!(content.contains("sort = \"bookmark\""));

    jotbook_cmd(temp.path())
        .args(["config", "sort"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bookmark"));
}

#[test]
fn test_config_applies_to_session() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .args(["config", "samples", "false"])
        .assert()
        .success();

    jotbook_cmd(temp.path())
        .write_stdin("status\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Begin Your Journal"))
        .stdout(predicate::str::contains("Entries: 0"));

    jotbook_cmd(temp.path())
        .arg("--samples")
        .write_stdin("status\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries: 3"));
}

#[test]
fn test_config_home_env() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("elsewhere");

    jotbook_cmd(temp.path())
        .env("JOTBOOK_HOME", &home)
        .args(["config", "log_level", "info"])
        .assert()
        .success();

    assert!(home.join("config.toml").exists());
    assert!(!temp.path().join(".jotbook").exists());
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .args(["config", "editor"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown config key: 'editor'"));
}

#[test]
fn test_config_invalid_value_fails() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .args(["config", "sort", "title"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid sort mode"))
        .stderr(predicate::str::contains("jotbook config sort bookmark"));
}

#[test]
fn test_broken_config_file_fails() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(".jotbook")).unwrap();
    fs::write(temp.path().join(".jotbook/config.toml"), "samples = \"yes\"\n").unwrap();

    jotbook_cmd(temp.path())
        .write_stdin("")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config.toml"));
}

#[test]
fn test_config_set_logs_at_requested_level() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .args(["--log-level", "info", "config", "sort", "bookmark"])
        .assert()
        .success()
        .stderr(predicate::str::contains("event=config_set key=sort"));
}

#[test]
fn test_config_is_quiet_by_default() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .args(["config", "sort", "bookmark"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
