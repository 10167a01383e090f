//! End-to-end tests for the search actions and the statistics report.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for the biblio binary
fn biblio_cmd() -> Command {
    Command::cargo_bin("biblio").unwrap()
}

#[test]
fn test_author_search_matches_ignoring_case() {
    biblio_cmd()
        .write_stdin("5\nj.r.r. tolkien\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Lord of the Rings"));
}

#[test]
fn test_author_search_requires_the_full_name() {
    biblio_cmd()
        .write_stdin("5\nTolkien\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No matches."))
        .stdout(predicate::str::contains("The Lord of the Rings").not());
}

#[test]
fn test_year_search_returns_only_matching_records() {
    biblio_cmd()
        .write_stdin("6\n1954\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Lord of the Rings"))
        .stdout(predicate::str::contains("Science Magazine").not());
}

#[test]
fn test_year_search_covers_both_variants() {
    biblio_cmd()
        .write_stdin("6\n2023\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Science Magazine"));
}

#[test]
fn test_year_search_without_matches() {
    biblio_cmd()
        .write_stdin("6\n1900\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No matches."));
}

#[test]
fn test_year_search_rejects_non_numeric_input() {
    biblio_cmd()
        .write_stdin("6\nabc\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "invalid input: expected a number, got 'abc'",
        ))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_statistics_on_the_seed_catalog() {
    biblio_cmd()
        .write_stdin("8\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total books: 1"))
        .stdout(predicate::str::contains("Total magazines: 1"))
        .stdout(predicate::str::contains(
            "Most pages: ISBN: 123, Title: The Lord of the Rings",
        ))
        .stdout(predicate::str::contains("Average pages: 625.0"));
}

#[test]
fn test_statistics_reflect_mutations() {
    // Removing both seeds empties the catalog; the report shows zeros and
    // no most-pages record.
    biblio_cmd()
        .write_stdin("4\n123\n4\n456\n8\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total books: 0"))
        .stdout(predicate::str::contains("Total magazines: 0"))
        .stdout(predicate::str::contains("Most pages: none"))
        .stdout(predicate::str::contains("Average pages: 0.0"));
}
