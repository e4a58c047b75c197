//! End-to-end tests for the `sitectl` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const LEDGER: &str = r#"
name: Tower A
budget: { total_budget: 100000.00 }
costs:
  - { date: 2025-01-10, amount: 12500.00, category: material, description: Rebar }
income:
  - { date: 2025-01-05, amount: 50000.00, description: Advance }
progress:
  - { as_of: 2025-01-31, percent_complete: 12.5 }
baseline:
  - { date: 2025-01-01, planned_percent: 0 }
  - { date: 2025-12-31, planned_percent: 100 }
"#;

fn sitectl(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sitectl").unwrap();
    cmd.env("SITECTL_DATA_DIR", data_dir.path()).env_remove("RUST_LOG");
    cmd
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn calc_evm_json_matches_reference_figures() {
    let dir = TempDir::new().unwrap();

    sitectl(&dir)
        .args([
            "calc", "evm", "--budget", "100000000", "--actual", "40000000", "--planned",
            "50000000", "--earned", "35000000", "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cv\": -5000000.0"))
        .stdout(predicate::str::contains("\"sv\": -15000000.0"))
        .stdout(predicate::str::contains("\"cpi\": 0.875"))
        .stdout(predicate::str::contains("\"spi\": 0.7"));
}

#[test]
fn calc_evm_table_with_zero_actual() {
    let dir = TempDir::new().unwrap();

    sitectl(&dir)
        .args([
            "calc", "evm", "--budget", "1000", "--actual", "0", "--planned", "0", "--earned", "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost performance index (CPI)"))
        .stdout(predicate::str::contains("1.00 (no data)"));
}

#[test]
fn calc_utilization() {
    let dir = TempDir::new().unwrap();

    sitectl(&dir)
        .args(["calc", "utilization", "--budget", "100000000", "--actual", "40000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget utilization: 40%"));

    sitectl(&dir)
        .args(["calc", "utilization", "--budget", "0", "--actual", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget utilization: 0.0%"));
}

#[test]
fn report_cash_flow_terminal() {
    let dir = TempDir::new().unwrap();
    let ledger = write_file(&dir, "tower.yaml", LEDGER);

    sitectl(&dir)
        .args(["report", "cash-flow"])
        .arg(&ledger)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cash Flow - Tower A"))
        .stdout(predicate::str::contains("Balance:       $37,500.00"))
        .stdout(predicate::str::contains("Expense ratio: 25%"));
}

#[test]
fn report_evm_terminal_and_csv() {
    let dir = TempDir::new().unwrap();
    let ledger = write_file(&dir, "tower.yaml", LEDGER);

    sitectl(&dir)
        .args(["report", "evm"])
        .arg(&ledger)
        .args(["--as-of", "2025-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Earned Value Summary - Tower A (as of 2025-01-31)"))
        .stdout(predicate::str::contains("$12,500.00"))
        .stdout(predicate::str::contains("on target"));

    let csv_path = dir.path().join("evm.csv");
    sitectl(&dir)
        .args(["report", "evm"])
        .arg(&ledger)
        .args(["--as-of", "2025-01-31", "--planned", "25000", "--output"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("EVM report exported to"));

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.contains("Tower A,2025-01-31,AC,12500.00"));
    assert!(csv.contains("Tower A,2025-01-31,PV,25000.00"));
    assert!(csv.contains("Tower A,2025-01-31,SPI,0.5000"));
}

#[test]
fn report_s_curve_csv() {
    let dir = TempDir::new().unwrap();
    let ledger = write_file(&dir, "tower.yaml", LEDGER);
    let csv_path = dir.path().join("curve.csv");

    sitectl(&dir)
        .args(["report", "s-curve"])
        .arg(&ledger)
        .args(["--until", "2025-02-15", "--output"])
        .arg(&csv_path)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Period End,Planned,Earned,Actual");
    assert!(lines[1].starts_with("2025-01-31,"));
    assert!(lines[2].starts_with("2025-02-15,"));
    assert!(lines[2].ends_with(",12500.00,12500.00"));
}

#[test]
fn export_yaml_bundle_to_stdout() {
    let dir = TempDir::new().unwrap();
    let ledger = write_file(&dir, "tower.yaml", LEDGER);

    sitectl(&dir)
        .arg("export")
        .arg(&ledger)
        .args(["--format", "yaml", "--as-of", "2025-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Project: Tower A"))
        .stdout(predicate::str::contains("schema_version: 1.0.0"));
}

#[test]
fn export_json_bundle_to_file_reads_back() {
    let dir = TempDir::new().unwrap();
    let ledger = write_file(&dir, "tower.yaml", LEDGER);
    let out = dir.path().join("bundle.json");

    sitectl(&dir)
        .arg("export")
        .arg(&ledger)
        .args(["--as-of", "2025-01-31", "--output"])
        .arg(&out)
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).unwrap();
    let bundle = sitecontrols::export::read_bundle_json(&text).unwrap();
    assert_eq!(bundle.project, "Tower A");
    assert_eq!(bundle.evm.result.ev, 12_500.0);
    assert_eq!(bundle.cash_flow.flow.entries.len(), 2);
}

#[test]
fn negative_cost_is_rejected() {
    let dir = TempDir::new().unwrap();
    let ledger = write_file(
        &dir,
        "bad.yaml",
        "name: Bad\nbudget: { total_budget: 10 }\ncosts:\n  - { date: 2025-01-01, amount: -5 }\n",
    );

    sitectl(&dir)
        .args(["report", "cash-flow"])
        .arg(&ledger)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cost entry #1 has a negative amount"));
}

#[test]
fn unknown_ledger_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let ledger = write_file(&dir, "tower.txt", LEDGER);

    sitectl(&dir)
        .args(["report", "evm"])
        .arg(&ledger)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot tell ledger format"));
}

#[test]
fn invalid_date_format_in_settings_is_reported() {
    let dir = TempDir::new().unwrap();
    let ledger = write_file(&dir, "tower.yaml", LEDGER);
    write_file(&dir, "config.json", r#"{"date_format": "%Q"}"#);

    sitectl(&dir)
        .args(["report", "s-curve"])
        .arg(&ledger)
        .args(["--until", "2025-02-15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format '%Q'"));
}

#[test]
fn config_shows_data_dir() {
    let dir = TempDir::new().unwrap();

    sitectl(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(dir.path().to_string_lossy().as_ref()))
        .stdout(predicate::str::contains("Initialized:      no"))
        .stdout(predicate::str::contains("Export format:    json"));
}
