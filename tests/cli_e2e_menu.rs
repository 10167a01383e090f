//! End-to-end tests for the interactive menu loop.
//!
//! These tests verify the CLI behavior of the default `menu` command by
//! invoking the binary directly, feeding it a scripted session on stdin,
//! and checking its output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for the biblio binary
fn biblio_cmd() -> Command {
    Command::cargo_bin("biblio").unwrap()
}

#[test]
fn test_help_mentions_the_catalog() {
    biblio_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive catalog of books and magazines",
        ));
}

#[test]
fn test_menu_lists_all_nine_actions_and_quits() {
    biblio_cmd()
        .write_stdin("9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Add book"))
        .stdout(predicate::str::contains("2. Add magazine"))
        .stdout(predicate::str::contains("3. Find by ISBN"))
        .stdout(predicate::str::contains("4. Remove element"))
        .stdout(predicate::str::contains("5. Search by author"))
        .stdout(predicate::str::contains("6. Search by year"))
        .stdout(predicate::str::contains("7. Update element"))
        .stdout(predicate::str::contains("8. Statistics"))
        .stdout(predicate::str::contains("9. Quit"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_explicit_menu_subcommand_behaves_like_the_default() {
    biblio_cmd()
        .arg("menu")
        .write_stdin("9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_out_of_range_choice_is_reported_and_loop_continues() {
    biblio_cmd()
        .write_stdin("12\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "menu choice must be between 1 and 9, got 12",
        ))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_non_numeric_choice_is_reported_and_loop_continues() {
    biblio_cmd()
        .write_stdin("quit\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "invalid input: expected a number, got 'quit'",
        ))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_end_of_input_at_menu_exits_cleanly() {
    biblio_cmd()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("9. Quit"))
        .stdout(predicate::str::contains("Goodbye!").not());
}

#[test]
fn test_non_numeric_field_is_discarded_without_crashing() {
    // A bad year aborts the add action; the offending line is consumed and
    // the very next line is read as a fresh menu choice.
    biblio_cmd()
        .write_stdin("1\n789\nThe Hobbit\nnineteen37\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "invalid input: expected a number, got 'nineteen37'",
        ))
        .stdout(predicate::str::contains("Added book").not())
        .stdout(predicate::str::contains("Goodbye!"));
}
