use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `chief` invocation against a throwaway database with every remote
/// collaborator switched off.
fn chief(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("chief").unwrap();
    cmd.env("CHIEF_DB_PATH", dir.path().join("chief.db"))
        .env_remove("CHIEF_LLM_API_KEY")
        .env_remove("CHIEF_EMBEDDING_API_KEY")
        .env_remove("CHIEF_QDRANT_URL")
        .env_remove("CHIEF_CALENDAR_TOKEN")
        .env_remove("CHIEF_TWILIO_ACCOUNT_SID");
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("chief").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal executive assistant"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("chief").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn seed_then_report() {
    let dir = TempDir::new().unwrap();

    chief(&dir)
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"contacts\": 6"))
        .stdout(predicate::str::contains("\"credentials\": 2"));

    chief(&dir)
        .args(["creds", "report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PROFESSIONAL DEVELOPMENT STATUS"))
        .stdout(predicate::str::contains("EMT-P"));

    chief(&dir)
        .args(["contacts", "search", "sunrise"])
        .assert()
        .success()
        .stdout(predicate::str::contains("City Manager"));
}

#[test]
fn note_session_is_classified_from_its_title() {
    let dir = TempDir::new().unwrap();
    chief(&dir)
        .args(["notes", "start", "Council budget prep"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"workspace\": \"command\""));
}

#[test]
fn unknown_briefing_kind_fails() {
    let dir = TempDir::new().unwrap();
    chief(&dir).args(["briefing", "--kind", "weekly"]).assert().failure();
}

#[test]
fn briefing_without_calendar_still_prints() {
    let dir = TempDir::new().unwrap();
    chief(&dir)
        .args(["briefing", "--kind", "eod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Calendar unavailable."));
}

#[test]
fn missing_credential_is_an_error() {
    let dir = TempDir::new().unwrap();
    chief(&dir)
        .args(["creds", "show", "Paramedic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
