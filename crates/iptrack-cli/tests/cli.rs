//! End-to-end tests for the `iptrack` binary.
//!
//! Nothing here reaches a real service: inputs are either rejected before
//! any request, or every endpoint points at a closed local port.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

const CLOSED_PORT_URL: &str = "http://127.0.0.1:1";

fn iptrack(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("iptrack").unwrap();
    cmd.env_remove("IPTRACK_PRIMARY_URL")
        .env_remove("IPTRACK_FALLBACK_URL")
        .env_remove("RUST_LOG")
        .env("IPTRACK_CONFIG", config)
        .arg("--no-color");
    cmd
}

#[test]
fn classify_prints_one_row_per_input() {
    let dir = tempfile::tempdir().unwrap();
    iptrack(&dir.path().join("config.toml"))
        .args(["classify", "8.8.8.8", "2001:4860:4860::8888", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8.8.8.8"))
        .stdout(predicate::str::contains("IPv4"))
        .stdout(predicate::str::contains("IPv6"))
        .stdout(predicate::str::contains("Invalid"));
}

#[test]
fn classify_json_uses_class_names() {
    let dir = tempfile::tempdir().unwrap();
    let output = iptrack(&dir.path().join("config.toml"))
        .args(["-o", "json", "classify", "::1", "256.1.1.1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["input"], "::1");
    assert_eq!(rows[0]["class"], "IPv6");
    assert_eq!(rows[1]["class"], "Invalid");
}

#[test]
fn lookup_rejects_invalid_address() {
    let dir = tempfile::tempdir().unwrap();
    iptrack(&dir.path().join("config.toml"))
        .args(["--primary-url", CLOSED_PORT_URL, "--fallback-url", CLOSED_PORT_URL])
        .args(["lookup", "not.an.ip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please enter a valid IPv4 or IPv6 address",
        ));
}

#[test]
fn lookup_rejects_empty_address() {
    let dir = tempfile::tempdir().unwrap();
    iptrack(&dir.path().join("config.toml"))
        .args(["lookup", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter an IP address"));
}

#[test]
fn lookup_reports_unreachable_services() {
    let dir = tempfile::tempdir().unwrap();
    iptrack(&dir.path().join("config.toml"))
        .args(["--primary-url", CLOSED_PORT_URL, "--fallback-url", CLOSED_PORT_URL])
        .args(["--timeout", "5", "lookup", "8.8.8.8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unable to retrieve IP information",
        ));
}

#[test]
fn myip_reports_detection_failure() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, format!("echo_url = \"{CLOSED_PORT_URL}/\"\n")).unwrap();

    iptrack(&config)
        .args(["--timeout", "5", "myip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to detect your IP address"));
}

#[test]
fn guide_can_show_one_os() {
    let dir = tempfile::tempdir().unwrap();
    iptrack(&dir.path().join("config.toml"))
        .args(["guide", "--os", "mac"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Track IP Address Locally"))
        .stdout(predicate::str::contains("ifconfig"))
        .stdout(predicate::str::contains("ipconfig").not());
}

#[test]
fn guide_defaults_to_every_os() {
    let dir = tempfile::tempdir().unwrap();
    iptrack(&dir.path().join("config.toml"))
        .arg("guide")
        .assert()
        .success()
        .stdout(predicate::str::contains("Windows Instructions"))
        .stdout(predicate::str::contains("macOS Instructions"));
}

#[test]
fn config_set_then_show() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("nested").join("config.toml");

    iptrack(&config)
        .args(["config", "set", "timeout_secs", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success:"));

    assert!(config.exists());

    let output = iptrack(&config)
        .args(["-o", "json", "config", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let shown: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shown["timeout_secs"], 12);
    assert_eq!(shown["explain_by_default"], false);
}

#[test]
fn config_set_rejects_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    iptrack(&dir.path().join("config.toml"))
        .args(["config", "set", "api_key", "secret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn config_path_prints_override() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    iptrack(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn offline_commands_survive_broken_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "timeout_secs = [").unwrap();

    iptrack(&config)
        .args(["classify", "8.8.8.8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IPv4"))
        .stderr(predicate::str::contains("ignoring configuration"));

    iptrack(&config).arg("guide").assert().success();

    iptrack(&config)
        .args(["lookup", "8.8.8.8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn config_set_repairs_broken_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "timeout_secs = [").unwrap();

    iptrack(&config)
        .args(["config", "set", "output_format", "json"])
        .assert()
        .success();

    let output = iptrack(&config).args(["config", "show"]).output().unwrap();
    assert!(output.status.success());

    let shown: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shown["output_format"], "json");
}
