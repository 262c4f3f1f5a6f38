use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("gcal-holidays").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gcal-holidays"));
}

#[test]
fn list_without_api_key_is_a_configuration_error() {
    let mut cmd = Command::cargo_bin("gcal-holidays").unwrap();
    cmd.env_remove("GOOGLE_API_KEY")
        .args(["list", "--country", "US"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("missing API key"));
}

#[test]
fn list_without_country_is_a_configuration_error() {
    let mut cmd = Command::cargo_bin("gcal-holidays").unwrap();
    cmd.env("GOOGLE_API_KEY", "KEY").arg("list");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("missing country code"));
}

#[test]
fn unparseable_date_is_rejected() {
    let mut cmd = Command::cargo_bin("gcal-holidays").unwrap();
    cmd.args(["list", "--country", "US", "--api-key", "KEY", "--from", "someday"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("could not parse date"));
}

// Live test (opt-in): GOOGLE_API_KEY=... cargo test --features online
#[cfg(feature = "online")]
#[test]
fn list_online_dates() {
    let mut cmd = Command::cargo_bin("gcal-holidays").unwrap();
    cmd.args([
        "list",
        "--country",
        "US",
        "--from",
        "2024-01-01",
        "--to",
        "2025-01-01",
        "--dates-only",
        "--format",
        "text",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2024-12-25"));
}
