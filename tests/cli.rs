//! End-to-end tests for the tally binary
//!
//! Each test points TALLY_DATA_DIR at its own temp directory so the
//! snapshot files never collide.

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

fn tally(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn income_accumulates_across_invocations() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["income", "add", "1000"])
        .assert()
        .success()
        .stdout(contains("Income of 1000 added successfully!"));

    tally(&dir)
        .args(["income", "add", "250.5"])
        .assert()
        .success();

    tally(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Income: 1250.5"));
}

#[test]
fn invalid_amount_fails_without_mutation() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["income", "add", "abc"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount 'abc'"));

    tally(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Income: 0"));
}

#[test]
fn expense_over_default_budget_raises_alert() {
    let dir = TempDir::new().unwrap();

    tally(&dir).args(["income", "add", "1000"]).assert().success();

    tally(&dir)
        .args(["expense", "add", "rent", "800", "Utilities"])
        .assert()
        .success()
        .stdout(contains(
            "Expenses for Utilities have exceeded the budget of 0.00!",
        ))
        .stdout(contains("Expense added successfully!"));
}

#[test]
fn expense_within_budget_is_quiet() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["budget", "set", "Food", "100"])
        .assert()
        .success()
        .stdout(contains("Budget for Food set to 100!"));

    tally(&dir)
        .args(["expense", "add", "lunch", "12.5", "Food"])
        .assert()
        .success()
        .stdout(contains("Expense added successfully!"))
        .stdout(contains("exceeded the budget").not());
}

#[test]
fn unknown_category_is_rejected() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["expense", "add", "snacks", "5", "Groceries"])
        .assert()
        .failure()
        .stderr(contains("Unknown category 'Groceries'"));
}

#[test]
fn budget_set_overwrites_previous_limit() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["budget", "set", "Food", "100"])
        .assert()
        .success();
    tally(&dir)
        .args(["budget", "set", "Food", "40"])
        .assert()
        .success();

    tally(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(contains("Food"))
        .stdout(contains("40.00"))
        .stdout(contains("100.00").not());
}

#[test]
fn savings_reflects_income_minus_expenses() {
    let dir = TempDir::new().unwrap();

    tally(&dir).args(["income", "add", "500"]).assert().success();
    tally(&dir)
        .args(["expense", "add", "bus", "120", "Transport"])
        .assert()
        .success();

    tally(&dir)
        .arg("savings")
        .assert()
        .success()
        .stdout(contains("Your total savings are: 380"));
}

#[test]
fn reset_zeroes_the_ledger() {
    let dir = TempDir::new().unwrap();

    tally(&dir).args(["income", "add", "500"]).assert().success();
    tally(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(contains("All transactions deleted successfully!"));

    tally(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Income: 0"))
        .stdout(contains("Savings: 0"));
}

#[test]
fn chart_with_no_expenses_prints_notice() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("chart")
        .assert()
        .success()
        .stdout(contains("No expenses found. Please add transactions first."));
}

#[test]
fn chart_single_category_is_whole_pie() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["expense", "add", "a", "10", "Food"])
        .assert()
        .success();
    tally(&dir)
        .args(["expense", "add", "b", "30", "Food"])
        .assert()
        .success();

    tally(&dir)
        .arg("chart")
        .assert()
        .success()
        .stdout(contains("Food"))
        .stdout(contains("100.0%"));
}

#[test]
fn corrupt_ledger_recovers_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("transactions.json"), "not json").unwrap();

    tally(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Income: 0"));

    // The corrupt snapshot was replaced with a valid default
    let content = std::fs::read_to_string(dir.path().join("transactions.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["income"], 0.0);
}
