//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data
//! directory (LEARNY_ENV=dev) and verify outputs. Deck names are
//! unique per test so runs don't step on each other.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "learny-cli", "--"])
        .args(args)
        .env("LEARNY_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_deck_add_and_list() {
    let (stdout, _, code) = run_cli(&["deck", "add", "e2e-list-deck"]);
    assert_eq!(code, 0, "deck add failed");
    assert!(stdout.contains("Added deck") || stdout.contains("Deck already exists"));

    let (stdout, _, code) = run_cli(&["deck", "list"]);
    assert_eq!(code, 0, "deck list failed");
    assert!(stdout.contains("e2e-list-deck"));
}

#[test]
fn test_deck_add_duplicate_is_advisory() {
    let _ = run_cli(&["deck", "add", "e2e-dup-deck"]);
    let (stdout, _, code) = run_cli(&["deck", "add", "e2e-dup-deck"]);
    assert_eq!(code, 0, "duplicate deck add should not be a hard error");
    assert!(stdout.contains("Deck already exists"));
}

#[test]
fn test_card_add_and_list_json() {
    let (stdout, _, code) = run_cli(&[
        "card",
        "add",
        "e2e-card-deck",
        "capital of France?",
        "Paris",
        "--tags",
        "geo,europe",
    ]);
    assert_eq!(code, 0, "card add failed");
    assert!(stdout.contains("Card added:"));

    let (stdout, _, code) = run_cli(&["card", "list", "e2e-card-deck", "--json"]);
    assert_eq!(code, 0, "card list failed");
    let cards: serde_json::Value = serde_json::from_str(&stdout).expect("card list is JSON");
    let cards = cards.as_array().expect("JSON array");
    assert!(!cards.is_empty());
    let card = &cards[0];
    assert_eq!(card["question"], "capital of France?");
    assert!(card["dueDate"].is_string());
    assert!(card["confidenceFactor"].is_number());
}

#[test]
fn test_review_quality_grades_first_due_card() {
    let deck = "e2e-review-deck";
    let _ = run_cli(&["card", "add", deck, "2+2", "4"]);
    let (stdout, _, code) = run_cli(&["review", deck, "--quality", "5"]);
    assert_eq!(code, 0, "review failed");
    assert!(stdout.contains("Next review on") || stdout.contains("No cards due"));
}

#[test]
fn test_review_unknown_deck_reports_nothing_due() {
    let (stdout, _, code) = run_cli(&["review", "e2e-no-such-deck"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("No cards due"));
}

#[test]
fn test_tag_unknown_card_fails() {
    let deck = "e2e-tag-deck";
    let _ = run_cli(&["deck", "add", deck]);
    let (_, stderr, code) = run_cli(&["card", "tag", deck, "no-such-id", "--add", "x"]);
    assert_ne!(code, 0, "tagging an unknown card should fail");
    assert!(stderr.contains("not found"));
}

#[test]
fn test_config_path_prints_toml_location() {
    let (stdout, _, code) = run_cli(&["config", "path"]);
    assert_eq!(code, 0);
    assert!(stdout.trim_end().ends_with("config.toml"));
}
