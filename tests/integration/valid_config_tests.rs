//! These tests run the sampler for a short while against valid configs.

use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::rxb_command;

#[test]
fn test_empty_config() {
    rxb_command(&[
        "-C",
        "./tests/valid_configs/empty_config.toml",
        "--run-for",
        "1500ms",
    ])
    .assert()
    .success();
}

#[test]
fn test_all_settings() {
    rxb_command(&[
        "-C",
        "./tests/valid_configs/all_settings.toml",
        "--run-for",
        "1500ms",
    ])
    .assert()
    .success();
}

#[test]
fn test_disabled_in_config() {
    rxb_command(&[
        "-C",
        "./tests/valid_configs/disabled.toml",
        "--run-for",
        "2500ms",
    ])
    .assert()
    .success()
    .stdout(predicate::str::is_empty());
}

#[test]
fn test_creates_missing_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh").join("rxburst.toml");
    let path_str = path.to_str().unwrap();

    rxb_command(&["-C", path_str, "--disable", "--run-for", "100"])
        .assert()
        .success();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[traffic]"));
    assert!(written.contains("[display]"));
}
