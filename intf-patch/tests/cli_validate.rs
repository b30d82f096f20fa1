use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../fixtures")
        .join(path)
}

#[test]
fn validate_prints_normalized_record() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("intf-patch"));
    cmd.arg("validate")
        .arg(fixture("tickets/ticket_access_interface.json"))
        .arg("--model")
        .arg("switchport")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"interface_class\": \"GigabitEthernet\""))
        .stdout(predicate::str::contains("\"mode\": \"access\""))
        .stdout(predicate::str::contains("\"native_vlan\": 100"));
}

#[test]
fn validate_reports_every_ticket_before_failing() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("intf-patch"));
    cmd.arg("validate")
        .arg(fixture("tickets/ticket_invalid_vlan.json"))
        .arg(fixture("tickets/ticket_l3_interface.json"))
        .arg("--model")
        .arg("switchport")
        .arg("--format")
        .arg("json")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"status\": \"invalid\""))
        .stdout(predicate::str::contains("\"kind\": \"vlan_out_of_range\""))
        .stdout(predicate::str::contains("\"value\": \"4095\""))
        .stdout(predicate::str::contains("\"status\": \"valid\""))
        .stderr(predicate::str::contains("1 of 2 tickets failed validation"));
}

#[test]
fn interface_model_accepts_ticket_with_bad_vlan() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("intf-patch"));
    cmd.arg("validate")
        .arg(fixture("tickets/ticket_invalid_vlan.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"interface_index\": \"1/0/48\""));
}

#[test]
fn unreadable_ticket_is_reported() {
    let dir = tempdir().expect("tempdir");
    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ \"ticket\": ").expect("write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("intf-patch"));
    cmd.arg("validate")
        .arg(&broken)
        .assert()
        .failure()
        .stdout(predicate::str::contains("failed to parse JSON"));
}

#[test]
fn only_unloadable_files_are_unreadable() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("missing.json");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("intf-patch"));
    let output = cmd
        .arg("validate")
        .arg(&missing)
        .arg(fixture("tickets/ticket_trunk_interface.json"))
        .arg("--format")
        .arg("json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 of 2 tickets failed validation"))
        .get_output()
        .stdout
        .clone();

    let reports: serde_json::Value = serde_json::from_slice(&output).expect("json report");
    assert_eq!(reports[0]["status"], "unreadable");
    assert_eq!(reports[1]["status"], "valid");
    assert_eq!(reports[1]["record"]["mtu"], 9000);
}
