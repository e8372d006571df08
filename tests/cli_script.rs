use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn shell(bin: &str, home: &Path) -> Command {
    let mut cmd = Command::cargo_bin(bin).unwrap();
    cmd.env("POCKETBOOK_CLI_SCRIPT", "1")
        .env("POCKETBOOK_HOME", home)
        .env_remove("RUST_LOG");
    cmd
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn expense_tracker_adds_and_summarizes() {
    let home = TempDir::new().unwrap();
    let input = "1\n100\nFood\nn\n2024-01-01\n\
                 1\n50\nFood\nn\n2024-01-02\n\
                 1\n30\nTransport\nn\n2024-01-01\n\
                 2\n3\n4\n";

    shell("expense_tracker", home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Expense added successfully!"))
        .stdout(contains("Total Overall Spending: ₹180.00"))
        .stdout(contains("Food: ₹150.00"))
        .stdout(contains("Transport: ₹30.00"))
        .stdout(contains("2024-01-01: ₹130.00"))
        .stdout(contains("2024-01-02: ₹50.00"))
        .stdout(contains("Exiting program. Goodbye!"));

    let stored = read_json(&home.path().join("expenses.json"));
    let records = stored.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["amount"], 100.0);
    assert_eq!(records[0]["category"], "Food");
    assert_eq!(records[2]["date"], "2024-01-01");
}

#[test]
fn expense_tracker_reloads_previous_session() {
    let home = TempDir::new().unwrap();
    shell("expense_tracker", home.path())
        .write_stdin("1\n12.5\nBooks\nn\n2024-03-04\n4\n")
        .assert()
        .success();

    shell("expense_tracker", home.path())
        .write_stdin("2\n4\n")
        .assert()
        .success()
        .stdout(contains("Books: ₹12.50"));
}

#[test]
fn expense_tracker_on_empty_store_reports_nothing() {
    let home = TempDir::new().unwrap();
    shell("expense_tracker", home.path())
        .write_stdin("2\n3\n4\n")
        .assert()
        .success()
        .stdout(contains("Pocketbook expense tracker v"))
        .stdout(contains("built "))
        .stdout(contains("No expenses found."));

    assert!(!home.path().join("expenses.json").exists());
}

#[test]
fn expense_tracker_refuses_corrupt_store() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("expenses.json");
    fs::write(&path, "{ not json").unwrap();

    shell("expense_tracker", home.path())
        .write_stdin("4\n")
        .assert()
        .failure()
        .stderr(contains("Error:"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn todo_list_adds_completes_and_deletes() {
    let home = TempDir::new().unwrap();
    let input = "1\nGroceries\nMilk and eggs\nPersonal\n\
                 1\nReport\nQ3 numbers\nWork\n\
                 1\nDentist\nBook appointment\nUrgent\n\
                 3\n2\n4\n1\n2\n5\n";

    shell("todo_list", home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Task added successfully!"))
        .stdout(contains("Task marked as completed!"))
        .stdout(contains("Task \"Groceries\" deleted successfully!"))
        .stdout(contains("1 of 2 task(s) pending"))
        .stdout(contains("Tasks saved. Exiting application."));

    let stored = read_json(&home.path().join("tasks.json"));
    let records = stored.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["title"], "Report");
    assert_eq!(records[0]["completed"], true);
    assert_eq!(records[1]["title"], "Dentist");
    assert_eq!(records[1]["completed"], false);
}

#[test]
fn todo_list_rejects_out_of_range_positions() {
    let home = TempDir::new().unwrap();
    shell("todo_list", home.path())
        .write_stdin("1\nGym\nLeg day\nPersonal\n3\n7\n4\nx\n5\n")
        .assert()
        .success()
        .stdout(contains("Invalid task number!"));

    let stored = read_json(&home.path().join("tasks.json"));
    assert_eq!(stored.as_array().unwrap().len(), 1);
    assert_eq!(stored[0]["completed"], false);
}

#[test]
fn todo_list_saves_on_end_of_input() {
    let home = TempDir::new().unwrap();
    shell("todo_list", home.path())
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(contains("No tasks available."))
        .stdout(contains("Tasks saved. Exiting application."));

    assert_eq!(
        fs::read_to_string(home.path().join("tasks.json")).unwrap(),
        "[]\n"
    );
}

#[test]
fn config_file_overrides_currency_and_file_names() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.json"),
        r#"{ "currency_symbol": "$", "expenses_file": "spend.json" }"#,
    )
    .unwrap();

    shell("expense_tracker", home.path())
        .write_stdin("1\n9.99\nSnacks\nn\n2024-05-05\n2\n4\n")
        .assert()
        .success()
        .stdout(contains("Total Overall Spending: $9.99"));

    assert!(home.path().join("spend.json").exists());
    assert!(!home.path().join("expenses.json").exists());
}
