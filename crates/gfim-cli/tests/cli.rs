//! End-to-end tests for the `gfim` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gfim(store: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gfim").unwrap();
    cmd.env("GFIM_STORE", store.path().join("gfim.redb"));
    cmd
}

#[test]
fn help_lists_commands() {
    Command::cargo_bin("gfim")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("load"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn run_rejects_bad_date() {
    let dir = TempDir::new().unwrap();
    gfim(&dir)
        .args(["run", "--date", "30-01-2026"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn load_rejects_malformed_json() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("rows.json");
    std::fs::write(&file, "{not json").unwrap();

    gfim(&dir)
        .args(["load", "--table", "treasury-bills", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot load"));
}

#[test]
fn load_run_show_round_trip() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("bills.json");
    std::fs::write(
        &file,
        r#"[{
            "date": "2026-01-30",
            "isin": "GH0000011111",
            "closing_price": 96.5,
            "days_to_maturity": 91,
            "volume_traded": 2000000.0,
            "day_high_yield": 14.2,
            "day_low_yield": 13.8
        }]"#,
    )
    .unwrap();

    gfim(&dir)
        .args(["load", "--table", "treasury-bills", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("loaded 1 rows into treasury_bills"));

    gfim(&dir)
        .args(["run", "--date", "2026-01-30", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"metric_count\": 1"))
        .stdout(predicate::str::contains("\"persisted\": true"));

    gfim(&dir)
        .args(["show", "metrics", "--date", "2026-01-30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GH0000011111"))
        .stdout(predicate::str::contains("14.5476"));

    gfim(&dir)
        .args(["show", "curve", "--date", "2026-01-30", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("91D"));

    gfim(&dir)
        .args(["show", "summary", "--date", "2026-01-30", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"most_active_isin\": \"GH0000011111\""));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("bills.json");
    std::fs::write(
        &file,
        r#"[{"date": "2026-01-30", "isin": "GH0000022222", "closing_price": 97.0, "days_to_maturity": 182}]"#,
    )
    .unwrap();

    gfim(&dir)
        .args(["load", "--table", "treasury-bills", "--file"])
        .arg(&file)
        .assert()
        .success();

    gfim(&dir)
        .args(["run", "--date", "2026-01-30", "--dry-run", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"persisted\": false"));

    gfim(&dir)
        .args(["show", "summary", "--date", "2026-01-30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No summary for 2026-01-30"));
}

#[test]
fn show_alerts_empty_day() {
    let dir = TempDir::new().unwrap();
    gfim(&dir)
        .args(["show", "alerts", "--date", "2026-01-30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results."));
}
