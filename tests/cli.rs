//! End-to-end tests for the tallybook binary
//!
//! Each test runs against its own temp data directory via TALLYBOOK_DATA_DIR.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tallybook(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tallybook").unwrap();
    cmd.env("TALLYBOOK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_then_summary_shows_totals() {
    let dir = TempDir::new().unwrap();

    tallybook(&dir)
        .args(["add", "income", "5000", "Salary", "-D", "2025-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added income $5000.00 (Salary)"));

    tallybook(&dir)
        .args(["add", "expense", "1200", "Housing", "-D", "2025-01-10"])
        .assert()
        .success();

    tallybook(&dir)
        .args(["add", "expense", "300", "Food", "-D", "2025-01-20"])
        .assert()
        .success();

    tallybook(&dir)
        .args(["summary", "2025-01"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Income:")
                .and(predicate::str::contains("$5000.00"))
                .and(predicate::str::contains("$1500.00"))
                .and(predicate::str::contains("$3500.00"))
                .and(predicate::str::contains("Housing"))
                .and(predicate::str::contains("Food")),
        );

    // Other months stay empty.
    tallybook(&dir)
        .args(["summary", "2025-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$0.00"));
}

#[test]
fn delete_removes_only_the_given_id() {
    let dir = TempDir::new().unwrap();

    let output = tallybook(&dir)
        .args(["add", "expense", "42", "Food", "-D", "2025-03-01"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let id = stdout
        .lines()
        .find_map(|l| l.strip_prefix("Id: "))
        .expect("add prints the new id")
        .trim()
        .to_string();

    tallybook(&dir)
        .args(["add", "expense", "10", "Transport", "-D", "2025-03-02"])
        .assert()
        .success();

    tallybook(&dir)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted transaction"));

    tallybook(&dir)
        .args(["summary", "2025-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transport").and(predicate::str::contains("Food").not()));

    // Deleting the same id again is a no-op, not an error.
    tallybook(&dir)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transaction with id"));
}

#[test]
fn clear_month_leaves_other_months_intact() {
    let dir = TempDir::new().unwrap();

    tallybook(&dir)
        .args(["add", "expense", "100", "Food", "-D", "2025-01-15"])
        .assert()
        .success();
    tallybook(&dir)
        .args(["add", "expense", "200", "Food", "-D", "2025-02-15"])
        .assert()
        .success();

    tallybook(&dir)
        .args(["clear-month", "2025-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 transaction(s) from 2025-02"));

    tallybook(&dir)
        .args(["summary", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$100.00"));
}

#[test]
fn budget_goal_shows_progress_in_summary() {
    let dir = TempDir::new().unwrap();

    tallybook(&dir)
        .args(["budget", "set", "2000", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget for 2025-01 set to $2000.00"));

    tallybook(&dir)
        .args(["add", "expense", "500", "Utilities", "-D", "2025-01-08"])
        .assert()
        .success();

    tallybook(&dir)
        .args(["summary", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(25% spent)"));

    tallybook(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01  $2000.00"));
}

#[test]
fn new_income_category_is_registered_through_entry() {
    let dir = TempDir::new().unwrap();

    tallybook(&dir)
        .args(["add", "income", "800", "Rental", "-D", "2025-01-02"])
        .assert()
        .success();

    tallybook(&dir)
        .args(["categories", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary").and(predicate::str::contains("Rental")));

    tallybook(&dir)
        .args(["categories", "add-income", "Rental"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn invalid_input_is_rejected_by_the_cli() {
    let dir = TempDir::new().unwrap();

    // Unknown expense category.
    tallybook(&dir)
        .args(["add", "expense", "10", "Yachts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown expense category"));

    // Non-positive amount.
    tallybook(&dir)
        .args(["add", "expense", "0", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be positive"));

    // Garbage month key.
    tallybook(&dir)
        .args(["summary", "never"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month key"));
}
