//! Integration tests for the interactive session

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::jotbook_cmd;

#[test]
fn test_samples_listed_by_default() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Journali"))
        .stdout(predicate::str::contains(" 1. [*] My Birthday"))
        .stdout(predicate::str::contains(" 2. [ ] Today's Journal"))
        .stdout(predicate::str::contains(" 3. [ ] Great Day"));
}

#[test]
fn test_empty_start_shows_empty_state() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .arg("--empty")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Begin Your Journal"))
        .stdout(predicate::str::contains("My Birthday").not());
}

#[test]
fn test_create_and_save_entry() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .arg("--empty")
        .write_stdin("new\ntitle First Day\nbody Wrote my first entry.\nsave\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved \"First Day\"."))
        .stdout(predicate::str::contains(" 1. [ ] First Day"))
        .stdout(predicate::str::contains("    Wrote my first entry."));
}

#[test]
fn test_new_entry_lands_first_by_date() {
    let temp = TempDir::new().unwrap();

    let output = jotbook_cmd(temp.path())
        .write_stdin("new\ntitle Fresh\nsave\n")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let last_list = stdout.rsplit("Saved \"Fresh\".").next().unwrap();
    let rows: Vec<&str> = last_list
        .lines()
        .filter(|line| line.starts_with(' ') && line.contains(". ["))
        .collect();

    assert_eq!(rows.len(), 4);
    assert!(rows[0].contains("Fresh"));
    assert!(rows[1].contains("My Birthday"));
}

#[test]
fn test_cancel_fresh_entry_discards_it() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .arg("--empty")
        .write_stdin("new\ncancel\nstatus\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Closed."))
        .stdout(predicate::str::contains("Entries: 0 (showing 0)"));
}

#[test]
fn test_sort_by_bookmark() {
    let temp = TempDir::new().unwrap();

    let output = jotbook_cmd(temp.path())
        .write_stdin("bookmark 3\nsort date\nsort bookmark\n")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let last_list = stdout.rsplit(" 1. ").next().unwrap();
    assert!(last_list.starts_with("[*] My Birthday"));
    assert!(stdout.ends_with("    Learned about ownership and borrowing.\n"));
}

#[test]
fn test_sort_flag() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .args(["--sort", "bookmark"])
        .write_stdin("status\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sort: Bookmark"));
}

#[test]
fn test_invalid_sort_flag_fails() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .args(["--sort", "title"])
        .write_stdin("")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid sort mode"));
}

#[test]
fn test_search_is_case_insensitive() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .write_stdin("search CAKE\nstatus\nsearch\nstatus\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries: 3 (showing 1)"))
        .stdout(predicate::str::contains("Search: 'CAKE'"))
        .stdout(predicate::str::contains("Entries: 3 (showing 3)"));
}

#[test]
fn test_delete_with_confirmation() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .write_stdin("delete 1\nyes\nstatus\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete Journal?"))
        .stdout(predicate::str::contains("Journal deleted."))
        .stdout(predicate::str::contains("Entries: 2 (showing 2)"));
}

#[test]
fn test_delete_declined_keeps_entry() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .write_stdin("delete 1\nno\nstatus\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept."))
        .stdout(predicate::str::contains("Entries: 3 (showing 3)"));
}

#[test]
fn test_discard_prompt() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .write_stdin("open 1\ntitle Something else\ncancel\ndiscard\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Are you sure you want to discard changes on this journal?",
        ))
        .stdout(predicate::str::contains("Changes discarded."))
        .stdout(predicate::str::contains("Something else").not());
}

#[test]
fn test_unknown_command_keeps_session_alive() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .write_stdin("dance\nstatus\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Unknown command: 'dance'"))
        .stdout(predicate::str::contains("Entries: 3"));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .args(["--log-level", "debug"])
        .write_stdin("new\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("event=").not())
        .stderr(predicate::str::contains("event=entry_created"));
}

#[test]
fn test_log_level_flag_overrides_rust_log() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .env("RUST_LOG", "off")
        .args(["--log-level", "debug"])
        .write_stdin("new\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("event=entry_created"));
}

#[test]
fn test_invalid_log_level_fails() {
    let temp = TempDir::new().unwrap();

    jotbook_cmd(temp.path())
        .args(["--log-level", "loud"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log level"));
}
