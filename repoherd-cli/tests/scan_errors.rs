//! Fatal configuration behavior of `repoherd scan`.
//!
//! The happy scan path is platform-keyed (the config must carry a key for
//! the build's OS family), so these tests pin down the fatal diagnostics
//! that behave the same everywhere.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn repoherd() -> Command {
    Command::cargo_bin("repoherd").expect("binary built")
}

#[test]
fn missing_config_file_aborts_with_nonzero_status() {
    let work = TempDir::new().unwrap();

    repoherd()
        .arg("scan")
        .arg("--config")
        .arg(work.path().join("absent.env"))
        .arg("--log-dir")
        .arg(work.path().join("logs"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration resolution failed"))
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn config_without_a_key_for_this_platform_aborts() {
    let work = TempDir::new().unwrap();
    let config = work.path().join(".env");
    // A key no supported family owns: resolution must fail on every OS.
    fs::write(&config, "LINUX_PATH=/srv/repos\n").unwrap();

    repoherd()
        .arg("scan")
        .arg("--config")
        .arg(&config)
        .arg("--log-dir")
        .arg(work.path().join("logs"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration resolution failed"));
}

#[test]
fn fatal_config_error_is_also_logged_to_the_day_file() {
    let work = TempDir::new().unwrap();
    let logs = work.path().join("logs");

    repoherd()
        .arg("scan")
        .arg("--config")
        .arg(work.path().join("absent.env"))
        .arg("--log-dir")
        .arg(&logs)
        .assert()
        .failure();

    let log_file = fs::read_dir(&logs)
        .unwrap()
        .next()
        .expect("log file")
        .unwrap()
        .path();
    let contents = fs::read_to_string(&log_file).unwrap();
    assert!(contents.contains("config file not found"));
}
