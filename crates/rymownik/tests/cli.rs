//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// A working directory holding a `dictionary` word list, the default
/// vocabulary location.
fn project_with_words(words: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("dictionary"), words).unwrap();
    tmp
}

/// Run a command from `dir` and parse its JSON stdout.
fn json_from(dir: &std::path::Path, args: &[&str]) -> serde_json::Value {
    let output = cmd()
        .arg("-C")
        .arg(dir)
        .args(args)
        .arg("--json")
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn short_help_flag_shows_usage() {
    cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn short_version_flag_shows_version() {
    cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn info_json_contains_expected_fields() {
    cmd()
        .arg("info")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\""))
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn info_help_shows_command_options() {
    cmd()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn short_quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn verbose_flag_accepted() {
    cmd().args(["--verbose", "info"]).assert().success();
}

#[test]
fn short_verbose_flag_accepted() {
    cmd().args(["-v", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_auto_accepted() {
    cmd().args(["--color", "auto", "info"]).assert().success();
}

#[test]
fn color_always_accepted() {
    cmd().args(["--color", "always", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Rhymes Command
// =============================================================================

const WORDS: &str = "kot\nbot\npłot\nnauka\nwoda\nbroda\nmoda\nnoga\nsamolot\n";

#[test]
fn rhymes_lists_best_first() {
    let tmp = project_with_words(WORDS);
    cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["--color", "never", "rhymes", "woda"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.00  broda"))
        .stdout(predicate::str::contains("0.40  noga"))
        .stdout(predicate::str::contains("woda").not());
}

#[test]
fn rhymes_piped_output_has_no_escape_codes() {
    let tmp = project_with_words(WORDS);
    cmd()
        .env_remove("FORCE_COLOR")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("IGNORE_IS_TERMINAL")
        .arg("-C")
        .arg(tmp.path())
        .args(["rhymes", "woda"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.00  broda"))
        .stdout(predicate::str::contains("\x1b").not());
}

#[test]
fn color_always_styles_scores() {
    let tmp = project_with_words(WORDS);
    cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["--color", "always", "rhymes", "woda"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[32m1.00"));
}

#[test]
fn rhymes_json_outputs_scoreboard() {
    let tmp = project_with_words(WORDS);
    let json = json_from(tmp.path(), &["rhymes", "kot"]);

    let board = json["scoreboard"].as_array().expect("scoreboard array");
    let words: Vec<&str> = board.iter().filter_map(|r| r["word"].as_str()).collect();
    assert_eq!(words, ["bot", "płot"]);
    assert_eq!(board[0]["score"], 1.0);
}

#[test]
fn rhymes_syllables_flag_picks_bucket() {
    let tmp = project_with_words(WORDS);
    let json = json_from(tmp.path(), &["rhymes", "kot", "--syllables", "3"]);

    let board = json["scoreboard"].as_array().expect("scoreboard array");
    assert_eq!(board.len(), 1);
    assert_eq!(board[0]["word"], "samolot");
    assert_eq!(board[0]["score"], 0.9);
}

#[test]
fn rhymes_limit_and_min_score() {
    let tmp = project_with_words(WORDS);

    let json = json_from(tmp.path(), &["rhymes", "woda", "--limit", "1"]);
    assert_eq!(json["scoreboard"].as_array().map(Vec::len), Some(1));

    let json = json_from(tmp.path(), &["rhymes", "woda", "--min-score", "0.5"]);
    let board = json["scoreboard"].as_array().expect("scoreboard array");
    assert!(board.iter().all(|r| r["score"].as_f64().unwrap() >= 0.5));
    assert!(!board.is_empty());
}

#[test]
fn rhymes_reports_when_nothing_found() {
    let tmp = project_with_words(WORDS);
    cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["rhymes", "xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no rhymes found"));
}

#[test]
fn rhymes_empty_scoreboard_is_json_array() {
    let tmp = project_with_words(WORDS);
    let json = json_from(tmp.path(), &["rhymes", "xyz"]);
    assert_eq!(json["scoreboard"], serde_json::json!([]));
}

#[test]
fn rhymes_dictionary_flag_reads_directory() {
    let tmp = TempDir::new().unwrap();
    let lists = tmp.path().join("listy");
    fs::create_dir(&lists).unwrap();
    fs::write(lists.join("a.txt"), "bot\n").unwrap();
    fs::write(lists.join("b.txt"), "płot\n").unwrap();
    fs::write(lists.join("notatki.md"), "kot\n").unwrap();

    let json = json_from(tmp.path(), &["rhymes", "kot", "--dictionary", "listy"]);
    assert_eq!(json["scoreboard"].as_array().map(Vec::len), Some(2));
}

#[test]
fn rhymes_blank_word_fails() {
    let tmp = project_with_words(WORDS);
    cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["rhymes", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("word must not be empty"));
}

#[test]
fn rhymes_missing_dictionary_fails() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["rhymes", "kot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load vocabulary"));
}

#[test]
fn rhymes_negative_syllables_rejected() {
    cmd()
        .args(["rhymes", "kot", "--syllables", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Analyze Command
// =============================================================================

#[test]
fn analyze_shows_segmentation() {
    cmd()
        .args(["analyze", "nauka"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nauka"))
        .stdout(predicate::str::contains("2_a"));
}

#[test]
fn color_never_keeps_analyze_and_info_plain() {
    for args in [&["--color", "never", "analyze", "kot"][..], &["--color", "never", "info"]] {
        cmd()
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::contains("\x1b").not());
    }
}

#[test]
fn analyze_json_outputs_array() {
    let tmp = TempDir::new().unwrap();
    let json = json_from(tmp.path(), &["analyze", "kot", "róg"]);

    let items = json.as_array().expect("array of analyses");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["key"], "1_ot");
    assert_eq!(items[1]["ending"], "uk");
    assert_eq!(items[1]["beginning"], "r");
}

#[test]
fn analyze_requires_a_word() {
    cmd()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_flag_shows_error() {
    cmd()
        .arg("--not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_flag_changes_directory() {
    // The -C flag should be accepted and work without error
    // We use a path that definitely exists
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
