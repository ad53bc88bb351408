//! Integration tests for `noop config`.
//!
//! Every test points `NOOP_CONFIG` at a temp path so it never reads or
//! writes `~/.noop/config.yaml`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use predicates::prelude::*;
use tempfile::TempDir;

use crate::cli_tests::noop;

#[test]
fn test_config_show_without_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    noop(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("agentcore"))
        .stdout(predicate::str::contains("900"))
        .stdout(predicate::str::contains("#6d28d9"));
}

#[test]
fn test_config_set_then_show_round_trips() {
    let dir = TempDir::new().unwrap();
    noop(&dir)
        .args(["config", "set", "runtime.timeout_secs", "120"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set runtime.timeout_secs = 120"));

    let out = noop(&dir)
        .args(["--json", "config", "show"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).expect("json");
    assert_eq!(value["config"]["runtime"]["timeout_secs"], 120);
}

#[test]
fn test_config_set_invalid_value_is_rejected() {
    let dir = TempDir::new().unwrap();
    noop(&dir)
        .args(["config", "set", "investigation.theme_color", "purple"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid value"));
    assert!(!dir.path().join("config.yaml").exists());
}

#[test]
fn test_config_set_unknown_key_json_code() {
    let dir = TempDir::new().unwrap();
    let out = noop(&dir)
        .args(["--json", "config", "set", "security.level", "strict"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).expect("json");
    assert_eq!(value["code"], "CONFIG");
}
