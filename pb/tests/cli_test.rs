//! Integration tests for the pb binary
//!
//! Drive the menu end to end with piped stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// pb command isolated from the user's config and log directories
fn pb(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pb").expect("pb binary should build");
    cmd.current_dir(temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("XDG_DATA_HOME", temp.path().join("data"))
        .env("NO_COLOR", "1");
    cmd
}

// =============================================================================
// Menu Tests
// =============================================================================

#[test]
fn test_capacity_two_scenario() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let script = concat!(
        "1\nAna\nLopez\n555\n",
        "1\nAna\nlopez\n999\n",
        "1\nBen\nCruz\n111\n",
        "1\nCal\nDiaz\n222\n",
        "5\nAna\nLOPEZ\n",
        "8\n",
        "1\nCal\nDiaz\n222\n",
        "3\n",
        "0\n"
    );

    pb(&temp)
        .args(["--capacity", "2"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"))
        .stdout(predicate::str::contains("Directory is full (2 entries)"))
        .stdout(predicate::str::contains("Contact removed: Ana Lopez - 555"))
        .stdout(predicate::str::contains("Current contacts: 1"))
        .stdout(predicate::str::contains("1. Ben Cruz - 111"))
        .stdout(predicate::str::contains("2. Cal Diaz - 222"));
}

#[test]
fn test_prompted_default_capacity() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    pb(&temp)
        .write_stdin("2\n8\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Maximum size: 10"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_config_default_capacity() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp.path().join(".phonebook.yml"), "default-capacity: 4\n").expect("write config");

    pb(&temp)
        .write_stdin("2\n8\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Maximum size: 4"));
}

#[test]
fn test_huge_capacity_does_not_preallocate() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    pb(&temp)
        .args(["--capacity", "9223372036854775807"])
        .write_stdin("1\nAna\nLopez\n555\n8\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added."))
        .stdout(predicate::str::contains("Maximum size: 9223372036854775807"))
        .stdout(predicate::str::contains("Current contacts: 1"));
}

#[test]
fn test_zero_default_capacity_in_config_uses_builtin_default() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp.path().join(".phonebook.yml"), "default-capacity: 0\n").expect("write config");

    pb(&temp)
        .write_stdin("1\n-5\n1\nAna\nLopez\n1\n8\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using the default size (10)."))
        .stdout(predicate::str::contains("Contact added."))
        .stdout(predicate::str::contains("Maximum size: 10"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    pb(&temp)
        .args(["--capacity", "3"])
        .write_stdin("1\nAna\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

// =============================================================================
// Config Subcommand Tests
// =============================================================================

#[test]
fn test_config_subcommand_prints_yaml() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    pb(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default-capacity: 10"))
        .stdout(predicate::str::contains("color: true"));
}

#[test]
fn test_unreadable_local_config_is_logged() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp.path().join(".phonebook.yml"), "default-capacity: [broken\n").expect("write config");

    pb(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default-capacity: 10"));

    let log_path = temp.path().join("data").join("phonebook").join("logs").join("phonebook.log");
    let log = std::fs::read_to_string(log_path).expect("log file should exist");
    assert!(log.contains("Skipping unreadable config"));
    assert!(log.contains(".phonebook.yml"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    pb(&temp)
        .args(["--config", "missing.yml", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
