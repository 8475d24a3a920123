//! CLI integration tests
//!
//! These tests drive the built binary against a temporary database and
//! verify that the commands delegate to the repository layer correctly.

use std::process::Command;
use tempfile::TempDir;

fn run(temp_dir: &TempDir, args: &[&str]) -> std::process::Output {
    let cli_bin = env!("CARGO_BIN_EXE_taskdeck-cli");
    let db_path = temp_dir.path().join("taskdeck.db");

    Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args(args)
        .args(["--db", db_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_category_add_and_list() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(&temp_dir, &["category", "add", "Home"]);
    assert!(output.status.success(), "add should succeed");

    let output = run(&temp_dir, &["category", "list"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Home"), "list should print the category");
}

#[test]
fn test_task_add_and_category_show() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(&temp_dir, &["category", "add", "Household chores"]);
    assert!(output.status.success());

    // First category in a fresh database gets id 1
    let output = run(&temp_dir, &["task", "add", "Mow the lawn", "--category", "1"]);
    assert!(output.status.success(), "task add should succeed");

    let output = run(&temp_dir, &["category", "show", "1"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Household chores"));
    assert!(stdout.contains("Mow the lawn"));
}

#[test]
fn test_task_add_unknown_category_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(&temp_dir, &["task", "add", "Mow the lawn", "--category", "42"]);

    assert!(
        !output.status.success(),
        "saving a task against a missing category should fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"), "should report an error");
}

#[test]
fn test_show_missing_category_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(&temp_dir, &["category", "show", "42"]);

    assert!(!output.status.success());
}
