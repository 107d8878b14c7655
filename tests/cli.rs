mod common;

use predicates::prelude::*;
use tempfile::tempdir;

use common::fashionmate;

#[test]
fn help_lists_request_flags() {
    let dir = tempdir().unwrap();
    fashionmate(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--occasion").and(predicate::str::contains("--style")));
}

#[test]
fn offline_one_shot_prints_sample_look() {
    let dir = tempdir().unwrap();
    fashionmate(&dir)
        .args(["--occasion", "Beach wedding", "--style", "Female"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Soft Cocktail Evening"))
        .stdout(predicate::str::contains("More Options"));
}

#[test]
fn offline_one_shot_json_is_canonical() {
    let dir = tempdir().unwrap();
    let output = fashionmate(&dir)
        .args(["--occasion", "Tech Job Interview", "--style", "non-binary", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["primary_outfit"]["title"], "Soft Cocktail Evening");
    assert_eq!(value["primary_outfit"]["accessories"].as_array().unwrap().len(), 3);
    assert_eq!(value["additional_suggestions"].as_array().unwrap().len(), 3);
}

#[test]
fn invalid_form_exits_with_two() {
    let dir = tempdir().unwrap();
    let long_preferences = "x".repeat(201);
    fashionmate(&dir)
        .args(["--occasion", "   ", "--preferences", long_preferences.as_str()])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Please describe the occasion."))
        .stdout(predicate::str::contains("Required."))
        .stdout(predicate::str::contains("Limit to 200 characters."));
}

#[test]
fn empty_key_in_secrets_file_stays_offline() {
    let dir = tempdir().unwrap();
    let secrets = dir.path().join("secrets.toml");
    std::fs::write(&secrets, "GEMINI_API_KEY = \"\"\n").unwrap();

    fashionmate(&dir)
        .arg("--secrets")
        .arg(&secrets)
        .args(["--occasion", "Weekend Brunch", "--style", "Male"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Soft Cocktail Evening"));
}

#[test]
fn missing_secrets_file_is_fatal() {
    let dir = tempdir().unwrap();
    fashionmate(&dir)
        .args(["--secrets", "absent.toml", "--occasion", "Weekend Brunch", "--style", "Male"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read secrets file"));
}

#[test]
fn interactive_session_over_stdin() {
    let dir = tempdir().unwrap();
    fashionmate(&dir)
        .write_stdin("occasion Gallery Opening\nstyle Male\nsubmit\nsubmit\nreset\nshow\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("offline mode"))
        .stdout(predicate::str::contains("Soft Cocktail Evening"))
        .stdout(predicate::str::contains("reset first"))
        .stdout(predicate::str::contains("Please describe the occasion."));
}
