//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::rxb_command;

#[test]
fn test_toml_mismatch_type() {
    rxb_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_duplicate_key() {
    rxb_command(&["-C", "./tests/invalid_configs/duplicate_key.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate key"));
}

#[test]
fn test_not_a_table() {
    rxb_command(&["-C", "./tests/invalid_configs/traffic_not_a_table.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file error"));
}
