use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budgetboard(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budgetboard").unwrap();
    cmd.env("BUDGETBOARD_DATA_DIR", data_dir.path())
        .env_remove("BUDGETBOARD_TODAY")
        .env_remove("RUST_LOG")
        .args(["--today", "2024-06-15", "--seed", "42"]);
    cmd
}

#[test]
fn dashboard_is_the_default_command() {
    let dir = TempDir::new().unwrap();
    budgetboard(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard - 2024-06-15"))
        .stdout(predicate::str::contains("Savings Rate: 58%"));
}

#[test]
fn transactions_filter_by_type_and_search() {
    let dir = TempDir::new().unwrap();
    budgetboard(&dir)
        .args(["transactions", "--type", "expense", "--search", "rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly rent payment"))
        .stdout(predicate::str::contains("Matches: 1"))
        .stdout(predicate::str::contains("Salary").not());
}

#[test]
fn budget_csv_output() {
    let dir = TempDir::new().unwrap();
    budgetboard(&dir)
        .args(["budget", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Category,Budgeted,Spent,Remaining,Percent Used,Over Budget",
        ))
        .stdout(predicate::str::contains("Housing,1000.00,800.00,200.00,80,false"));
}

#[test]
fn goals_single_goal_json() {
    let dir = TempDir::new().unwrap();
    budgetboard(&dir)
        .args(["goals", "vacation", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Vacation\""))
        .stdout(predicate::str::contains("\"status\": \"in_progress\""));
}

#[test]
fn unknown_goal_fails() {
    let dir = TempDir::new().unwrap();
    budgetboard(&dir)
        .args(["goals", "Yacht"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Savings goal not found: Yacht"));
}

#[test]
fn invalid_today_fails() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("budgetboard")
        .unwrap()
        .env("BUDGETBOARD_DATA_DIR", dir.path())
        .args(["--today", "June 1st", "savings"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn out_of_range_today_is_an_error_not_a_crash() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("budgetboard")
        .unwrap()
        .env("BUDGETBOARD_DATA_DIR", dir.path())
        .args(["--today=-262143-01-01", "--seed", "1", "budget"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reference date out of range"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn savings_shows_projected_annual_savings() {
    let dir = TempDir::new().unwrap();
    budgetboard(&dir)
        .args(["savings", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"projected_annual_savings\": 1060000"));
}

#[test]
fn init_then_config_reflects_settings_file() {
    let dir = TempDir::new().unwrap();
    budgetboard(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"));

    assert!(dir.path().join("config.json").exists());

    budgetboard(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:      true"))
        .stdout(predicate::str::contains("Recent limit:    5"));
}

#[test]
fn settings_change_currency_and_default_format() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"currency_symbol": "€", "default_format": "table"}"#,
    )
    .unwrap();

    budgetboard(&dir)
        .arg("savings")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Savings: €5300.00"));
}
