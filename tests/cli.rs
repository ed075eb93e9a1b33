use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG")
        .arg("--plain");
    cmd
}

fn add_script(amount: &str, note: &str, category: usize, date: &str) -> String {
    format!("1\n{}\n{}\n{}\n{}\n", amount, note, category, date)
}

#[test]
fn menu_exits_cleanly_at_end_of_input() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Add Expense"))
        .stdout(predicate::str::contains("Thank you for using Personal Expense Tracker!"));
}

#[test]
fn added_expenses_persist_between_runs() {
    let dir = TempDir::new().unwrap();
    let script = format!(
        "{}{}9\n",
        add_script("12.50", "Lunch", 1, "2024-01-05"),
        add_script("7.50", "Snacks", 1, "2024-01-10")
    );

    expenses(&dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Expense added: ID: 2"));

    let data = fs::read_to_string(dir.path().join("data").join("expenses.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 2);
    assert_eq!(records[0]["amount"], serde_json::json!(12.5));

    expenses(&dir)
        .write_stdin("4\n\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses by Category"))
        .stdout(predicate::str::contains("$20.00"));
}

#[test]
fn monthly_summary_prints_text_chart() {
    let dir = TempDir::new().unwrap();
    let script = format!(
        "{}3\n2024\n1\n9\n",
        add_script("12.50", "Lunch", 1, "2024-01-05")
    );

    expenses(&dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("--- January 2024 Summary ---"))
        .stdout(predicate::str::contains(
            "Expense Distribution by Category - January 2024",
        ))
        .stdout(predicate::str::contains("100%"));
}

#[test]
fn deleting_missing_id_is_reported() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .write_stdin("6\n42\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense not found: 42"));
}

#[test]
fn malformed_data_file_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("expenses.json"), "{ not json").unwrap();

    expenses(&dir)
        .write_stdin("2\n\n9\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning:"))
        .stdout(predicate::str::contains("No expenses recorded yet."));

    assert!(data_dir.join("expenses.json.corrupt").exists());
}

#[test]
fn export_writes_csv_to_stdout() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .write_stdin(add_script("3", "Bus", 2, "2024-01-06"))
        .assert()
        .success();

    expenses(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id,date,category,amount,note\n"))
        .stdout(predicate::str::contains("1,2024-01-06,Transportation,3.00,Bus"));
}

#[test]
fn history_lists_audit_entries() {
    let dir = TempDir::new().unwrap();
    let script = format!("{}6\n1\n9\n", add_script("3", "Bus", 2, "2024-01-06"));
    expenses(&dir).write_stdin(script).assert().success();

    expenses(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("added    #1 2024-01-06 Transportation $3.00"))
        .stdout(predicate::str::contains("deleted  #1 2024-01-06 Transportation $3.00"));
}

#[test]
fn list_shows_table() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .write_stdin(add_script("12.50", "Lunch", 1, "2024-01-05"))
        .assert()
        .success();

    expenses(&dir)
        .args(["list", "--category", "Food & Dining"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("1 expenses, total $12.50"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses.json"))
        .stdout(predicate::str::contains("Chart mode"));
}
