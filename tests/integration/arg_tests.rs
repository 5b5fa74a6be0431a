//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::no_cfg_rxb_command;

#[test]
fn test_help() {
    no_cfg_rxb_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--run-for"))
        .stdout(predicate::str::contains("--config-location"));
}

#[test]
fn test_version() {
    no_cfg_rxb_command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_run_for() {
    no_cfg_rxb_command()
        .arg("--run-for")
        .arg("whenever")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--run-for' was set with an invalid value",
        ));
}

#[test]
fn test_zero_run_for() {
    no_cfg_rxb_command()
        .arg("--run-for")
        .arg("0s")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--run-for' was set with an invalid value",
        ));
}

#[test]
fn test_unknown_arg() {
    no_cfg_rxb_command()
        .arg("--interface")
        .arg("eth0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_disable_prints_nothing() {
    no_cfg_rxb_command()
        .args(["--disable", "--run-for", "1500ms"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
