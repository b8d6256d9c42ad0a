//! Binary-level tests for the almanac CLI

use assert_cmd::Command;
use predicates::prelude::*;

fn almanac() -> Command {
  let mut cmd = Command::cargo_bin("almanac").unwrap();
  cmd.args(["--delay-ms", "0", "--no-color"]);
  cmd
}

#[test]
fn test_one_shot_space_query_prints_only_the_space_card() {
  almanac()
    .args(["--query", "space"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Space Exploration Milestones"))
    .stdout(predicate::str::contains("Lunar Base"))
    .stdout(predicate::str::contains("Technology Trends for 2026").not());
}

#[test]
fn test_one_shot_unmatched_query_falls_back_with_a_message() {
  almanac()
    .args(["--query", "zzz-no-match"])
    .assert()
    .success()
    .stdout(predicate::str::contains("No insights found matching your search"))
    .stdout(predicate::str::contains("Technology Trends for 2026"))
    .stdout(predicate::str::contains("Space Exploration Milestones"));
}

#[test]
fn test_one_shot_empty_query_prints_the_full_catalog() {
  almanac()
    .args(["--query", ""])
    .assert()
    .success()
    .stdout(predicate::str::contains("Global Economy Outlook"))
    .stdout(predicate::str::contains("Health & Wellness Revolution"))
    .stdout(predicate::str::contains("Climate & Sustainability"))
    .stdout(predicate::str::contains("No insights found").not());
}

#[test]
fn test_interactive_search_submits_on_enter() {
  almanac()
    .write_stdin("health\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("Health & Wellness Revolution"))
    .stdout(predicate::str::contains("Telemedicine"));
}

#[test]
fn test_interactive_empty_input_renders_the_full_catalog() {
  almanac()
    .write_stdin("\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("Technology Trends for 2026"))
    .stdout(predicate::str::contains("Global Economy Outlook"))
    .stdout(predicate::str::contains("Health & Wellness Revolution"))
    .stdout(predicate::str::contains("Climate & Sustainability"))
    .stdout(predicate::str::contains("Social & Cultural Shifts"))
    .stdout(predicate::str::contains("Space Exploration Milestones"))
    .stdout(predicate::str::contains("No insights found").not());
}

#[test]
fn test_one_shot_success_keeps_stderr_quiet() {
  almanac().args(["--query", "space"]).assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn test_interactive_starts_with_the_placeholder() {
  almanac()
    .write_stdin(":q\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("Search for insights about New Year 2026"));
}

#[test]
fn test_header_names_the_view() {
  almanac()
    .args(["--query", "space"])
    .assert()
    .success()
    .stdout(predicate::str::contains("New Year 2026 Insights"));
}
