//! End-to-end tests for the saga CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write a lexicon file into a fresh temp directory.
fn lexicon_file(json: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lexicon.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}

fn saga() -> Command {
    Command::cargo_bin("saga").unwrap()
}

// ---------------------------------------------------------------------------
// parse
// ---------------------------------------------------------------------------

#[test]
fn parse_movement_as_json() {
    saga()
        .args(["parse", "go", "north", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""action":"move""#)
                .and(predicate::str::contains(r#""direction":"north""#))
                .and(predicate::str::contains(r#""raw":"go north""#)),
        );
}

#[test]
fn parse_prints_readable_command() {
    saga()
        .args(["parse", "give gold to merchant"])
        .assert()
        .success()
        .stdout(predicate::str::contains("give [gold] -> [merchant]"));
}

#[test]
fn parse_unknown_suggests_a_verb() {
    saga()
        .args(["parse", "atack", "goblin"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#"unknown "atack goblin""#)
                .and(predicate::str::contains("did you mean: attack")),
        );
}

#[test]
fn parse_malformed_order_is_unknown() {
    saga()
        .args(["parse", "tell bob attack", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""action":"unknown""#)
                .and(predicate::str::contains(r#""diagnostic":"missing_argument_shape""#))
                .and(predicate::str::contains("target").not()),
        );
}

#[test]
fn parse_uses_conversation_partner() {
    saga()
        .args(["parse", "talk", "--partner", "Mira", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""target":"Mira""#));
}

#[test]
fn parse_reorders_give_to_visible_npc() {
    saga()
        .args(["parse", "give tom the pipe", "--npc", "Tom", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""target":"pipe""#)
                .and(predicate::str::contains(r#""secondary_target":"Tom""#)),
        );
}

#[test]
fn parse_run_in_combat_flees() {
    saga()
        .args(["parse", "run", "--combat", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""action":"flee""#));

    saga()
        .args(["parse", "run", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""action":"move""#));
}

#[test]
fn parse_requires_text() {
    saga().arg("parse").assert().failure();
}

#[test]
fn parse_with_house_rule_lexicon() {
    let (_dir, path) = lexicon_file(r#"{"extend_builtin": true, "verbs": {"attack": ["smite"]}}"#);
    saga()
        .args(["--lexicon", path.to_str().unwrap(), "parse", "smite the orc", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""action":"attack""#)
                .and(predicate::str::contains(r#""target":"orc""#)),
        );
}

#[test]
fn parse_with_missing_lexicon_fails() {
    saga()
        .args(["--lexicon", "/nonexistent/lexicon.json", "parse", "look"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: cannot read"));
}

// ---------------------------------------------------------------------------
// repl
// ---------------------------------------------------------------------------

#[test]
fn repl_parses_until_quit() {
    saga()
        .args(["repl", "--json"])
        .write_stdin("go north\npick up the sword\nquit\nlook\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""direction":"north""#)
                .and(predicate::str::contains(r#""target":"sword""#))
                .and(predicate::str::contains(r#""action":"look""#).not()),
        );
}

#[test]
fn repl_stops_at_end_of_input() {
    saga()
        .arg("repl")
        .write_stdin("leave sword\n\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("drop [sword]")
                .and(predicate::str::contains("note: empty input")),
        );
}

// ---------------------------------------------------------------------------
// vocab
// ---------------------------------------------------------------------------

#[test]
fn vocab_lists_all_verbs() {
    saga()
        .arg("vocab")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Synonyms")
                .and(predicate::str::contains("pick up"))
                .and(predicate::str::contains("party_order"))
                .and(predicate::str::contains("leave"))
                .and(predicate::str::contains("32 verbs")),
        );
}

#[test]
fn vocab_filters_by_verb() {
    saga()
        .args(["vocab", "get"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("grab")
                .and(predicate::str::contains("escape").not()),
        );
}

#[test]
fn vocab_rejects_unknown_verb() {
    saga()
        .args(["vocab", "dance"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a canonical verb"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_accepts_valid_lexicon() {
    let (_dir, path) = lexicon_file(
        r#"{"verbs": {"get": ["get", "take"], "look": ["look"]}, "directions": {"north": ["north", "n"]}}"#,
    );
    saga()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("All checks passed")
                .and(predicate::str::contains("2 verbs")),
        );
}

#[test]
fn check_rejects_conflicting_surface() {
    let (_dir, path) = lexicon_file(r#"{"verbs": {"get": ["take"], "drop": ["take"]}}"#);
    saga()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"take\" is mapped to both"));
}

#[test]
fn check_rejects_unknown_verb_name() {
    let (_dir, path) = lexicon_file(r#"{"verbs": {"dance": ["boogie"]}}"#);
    saga()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown verb"));
}

#[test]
fn check_rejects_malformed_json() {
    let (_dir, path) = lexicon_file("{ not json");
    saga()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid lexicon JSON"));
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_to_stdout() {
    saga()
        .arg("export")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"verbs\"")
                .and(predicate::str::contains("\"pick up\""))
                .and(predicate::str::contains("\"contextual\"")),
        );
}

#[test]
fn exported_lexicon_passes_check() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("english.json");

    saga()
        .args(["export", "-o", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    saga()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));

    saga()
        .args(["--lexicon", path.to_str().unwrap(), "parse", "pick up the lamp", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""target":"lamp""#));
}
