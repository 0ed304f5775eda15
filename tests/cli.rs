//! End-to-end tests for the city-budgeter binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the user's real configuration
fn budgeter(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("city-budgeter").unwrap();
    cmd.env("CITY_BUDGETER_DIR", config_dir)
        .env_remove("CITY_BUDGETER_LOG");
    cmd
}

#[test]
fn test_compare_default_budget() {
    let dir = TempDir::new().unwrap();

    budgeter(dir.path())
        .args(["compare", "Berlin", "Leipzig"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minimum for student visa"))
        .stdout(predicate::str::contains("€1380"))
        .stdout(predicate::str::contains("-€388"))
        .stdout(predicate::str::contains(
            "Earn at least €134 more per month to reach the goal",
        ))
        .stdout(predicate::str::contains("Monthly Expenses and Leftover Budget"));
}

#[test]
fn test_compare_goal_reached() {
    let dir = TempDir::new().unwrap();

    budgeter(dir.path())
        .args([
            "compare",
            "Leipzig",
            "--extra-income",
            "500",
            "--goal",
            "Trip to Spain",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("€1206"))
        .stdout(predicate::str::contains("Goal achievable with your current budget"));
}

#[test]
fn test_no_subcommand_uses_configured_cities() {
    let dir = TempDir::new().unwrap();

    budgeter(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Berlin"))
        .stdout(predicate::str::contains("Leipzig"));
}

#[test]
fn test_empty_selection_prompts() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), r#"{"default_cities": []}"#).unwrap();

    budgeter(dir.path())
        .arg("compare")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please select at least one city to compare.",
        ))
        .stdout(predicate::str::contains("Total Expenses").not());
}

#[test]
fn test_unknown_city_is_skipped() {
    let dir = TempDir::new().unwrap();

    budgeter(dir.path())
        .args(["compare", "Atlantis", "Bonn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped Atlantis: Unknown city: Atlantis"))
        .stdout(predicate::str::contains("Bonn"));
}

#[test]
fn test_income_out_of_range_fails() {
    let dir = TempDir::new().unwrap();

    budgeter(dir.path())
        .args(["compare", "Berlin", "--income", "5000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("income must be in [700, 3000], got 5000"));
}

#[test]
fn test_too_many_cities_fails() {
    let dir = TempDir::new().unwrap();

    budgeter(dir.path())
        .args(["compare", "Berlin", "Bonn", "Mainz", "Dresden"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("select at most 3 cities, got 4"));
}

#[test]
fn test_export_json() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("results.json");

    budgeter(dir.path())
        .args(["compare", "Leipzig", "--extra-income", "500", "--goal", "spain", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Results exported to"));

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(document["input"]["goal_name"], "Trip to Spain");
    assert_eq!(document["results"][0]["city"], "Leipzig");
    assert_eq!(document["results"][0]["projected_savings"], 1206.0);
    assert_eq!(document["results"][0]["goal_reached"], true);
}

#[test]
fn test_export_csv_with_explicit_format() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("results.txt");

    budgeter(dir.path())
        .args(["compare", "Berlin", "--format", "csv", "--output"])
        .arg(&output)
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("City,Total Expenses,Leftover,Savings in 3 Months"));
    assert!(text.contains("Berlin,1380.00,-388.00,0.00,No,134.00"));
}

#[test]
fn test_cities_lists_builtin_table() {
    let dir = TempDir::new().unwrap();

    budgeter(dir.path())
        .arg("cities")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gießen"))
        .stdout(predicate::str::contains("15 cities"));
}

#[test]
fn test_custom_cities_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("cities.yaml");
    fs::write(
        &file,
        "cities:\n  - name: Graz\n    rent: 550\n    food: 260\n    transport: 30\n",
    )
    .unwrap();

    budgeter(dir.path())
        .args(["compare", "Graz", "--cities-file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("€840"))
        .stdout(predicate::str::contains("€152"));
}

#[test]
fn test_goals_lists_presets() {
    let dir = TempDir::new().unwrap();

    budgeter(dir.path())
        .arg("goals")
        .assert()
        .success()
        .stdout(predicate::str::contains("Trip to Spain"))
        .stdout(predicate::str::contains("€5000"));
}

#[test]
fn test_config_shows_paths() {
    let dir = TempDir::new().unwrap();

    budgeter(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("not found, using defaults"))
        .stdout(predicate::str::contains("Default cities:  Berlin, Leipzig"));
}
