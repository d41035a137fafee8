//! Integration tests for the clinic CLI binary.
//!
//! These tests verify end-to-end behavior including:
//! - Catalog tab filtering
//! - Bookable date listing with a pinned start date
//! - The full booking flow, from flags and from stdin
//! - Rejection of incomplete or invalid bookings

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Monday, so the third bookable date is Wednesday October 21
const MONDAY: &str = "2026-10-19";

/// Helper to create an isolated config file
fn setup_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write config");
    (temp_dir, path)
}

/// Helper to get the CLI binary, pointed at an empty config
fn cli(config: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("clinic"));
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn test_cli_help() {
    Command::new(assert_cmd::cargo::cargo_bin!("clinic"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("appointment booking"));
}

#[test]
fn test_catalog_all() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Consultation [consult]"))
        .stdout(predicate::str::contains("Laser Hair Removal [laser]"))
        .stdout(predicate::str::contains("Lip Augmentation"));
}

#[test]
fn test_catalog_single_tab() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .arg("catalog")
        .arg("--tab")
        .arg("bio")
        .assert()
        .success()
        .stdout(predicate::str::contains("Biorevitalization [bio]"))
        .stdout(predicate::str::contains("Jalupro (2.5ml)"))
        .stdout(predicate::str::contains("Botulinum").not());
}

#[test]
fn test_catalog_unknown_tab() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .arg("catalog")
        .arg("--tab")
        .arg("nonexistent")
        .assert()
        .success()
        .stdout(predicate::str::contains("No category with id 'nonexistent'"));
}

#[test]
fn test_dates_skip_weekends() {
    let (_dir, config) = setup_config("");

    let output = cli(&config)
        .arg("dates")
        .arg("--from")
        .arg("2026-10-23")
        .arg("--count")
        .arg("3")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Fri 23"));
    assert!(lines[1].contains("Mon 26"));
    assert!(lines[2].contains("Tue 27"));
    assert!(!stdout.contains("Sat") && !stdout.contains("Sun"));
}

#[test]
fn test_dates_use_configured_horizon() {
    let (_dir, config) = setup_config("[booking]\nhorizon_days = 4\n");

    let output = cli(&config)
        .arg("dates")
        .arg("--from")
        .arg(MONDAY)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(String::from_utf8(output).unwrap().lines().count(), 4);
}

#[test]
fn test_book_general_consultation() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .arg("book")
        .arg("--from")
        .arg(MONDAY)
        .arg("--date-index")
        .arg("3")
        .arg("--time")
        .arg("14:00")
        .arg("--name")
        .arg("Jane Doe")
        .arg("--phone")
        .arg("+96170000000")
        .arg("--no-prompt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Request received"))
        .stdout(predicate::str::contains(
            "Thank you, Jane Doe. We have reserved your spot for General Consultation \
             on October 21 at 14:00.",
        ))
        .stdout(predicate::str::contains("Price: $30"));
}

#[test]
fn test_book_json_output() {
    let (_dir, config) = setup_config("");

    let output = cli(&config)
        .arg("book")
        .arg("--from")
        .arg(MONDAY)
        .arg("--treatment")
        .arg("brow lift")
        .arg("--date")
        .arg("2026-10-22")
        .arg("--time")
        .arg("10:00")
        .arg("--name")
        .arg("Lea")
        .arg("--phone")
        .arg("03 123 456")
        .arg("--no-prompt")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(summary["treatment_name"], "Brow Lift");
    assert_eq!(summary["treatment_price"], "$50");
    assert_eq!(summary["date_label"], "October 22");
    assert_eq!(summary["time"], "10:00");
    assert_eq!(summary["client_phone"], "03 123 456");
    assert!(summary["reference"].is_string());
}

#[test]
fn test_book_from_stdin() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .arg("book")
        .arg("--from")
        .arg(MONDAY)
        .write_stdin("1\n11:00\nJane Doe\n+96170000000\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("on October 19 at 11:00"));
}

#[test]
fn test_book_incomplete_fails() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .arg("book")
        .arg("--from")
        .arg(MONDAY)
        .arg("--date-index")
        .arg("1")
        .arg("--name")
        .arg("Jane Doe")
        .arg("--no-prompt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing: time, phone"));
}

#[test]
fn test_book_time_without_date_is_ignored() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .arg("book")
        .arg("--from")
        .arg(MONDAY)
        .arg("--time")
        .arg("12:00")
        .arg("--name")
        .arg("Jane Doe")
        .arg("--phone")
        .arg("+96170000000")
        .arg("--no-prompt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pick a date before choosing a time"))
        .stderr(predicate::str::contains("missing: date, time"));
}

#[test]
fn test_book_rejects_weekend_date() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .arg("book")
        .arg("--from")
        .arg(MONDAY)
        .arg("--date")
        .arg("2026-10-24")
        .arg("--no-prompt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a bookable date"));
}

#[test]
fn test_book_rejects_off_grid_time() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .arg("book")
        .arg("--from")
        .arg(MONDAY)
        .arg("--date-index")
        .arg("1")
        .arg("--time")
        .arg("14:30")
        .arg("--no-prompt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidTimeSlot"));
}

#[test]
fn test_book_unknown_treatment() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .arg("book")
        .arg("--treatment")
        .arg("Tattoo Removal")
        .arg("--no-prompt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("UnknownTreatment"));
}

#[test]
fn test_configured_default_treatment() {
    let (_dir, config) = setup_config("[booking]\ndefault_treatment = \"Skin Analysis\"\n");

    cli(&config)
        .arg("book")
        .arg("--from")
        .arg(MONDAY)
        .arg("--date-index")
        .arg("2")
        .arg("--time")
        .arg("16:00")
        .arg("--name")
        .arg("Jane Doe")
        .arg("--phone")
        .arg("+96170000000")
        .arg("--no-prompt")
        .assert()
        .success()
        .stdout(predicate::str::contains("spot for Skin Analysis on October 20"));
}

#[test]
fn test_invalid_config_rejected() {
    let (_dir, config) = setup_config("[booking]\nhorizon_days = 0\n");

    cli(&config)
        .arg("dates")
        .assert()
        .failure()
        .stderr(predicate::str::contains("horizon_days"));
}
