use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};
use predicates::str::contains;

fn cli(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sales_summary_cli").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("SALES_SUMMARY_STORES_DIR")
        .env_remove("SALES_SUMMARY_OUTPUT_DIR")
        .env_remove("SALES_SUMMARY_CURRENCY")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn runs_against_working_directory() {
    let temp = TempDir::new().unwrap();
    temp.child("stores/201/sales.json")
        .write_str(r#"{"total": 22385.32}"#)
        .unwrap();
    temp.child("stores/204/sales.json")
        .write_str("not valid json")
        .unwrap();

    cli(&temp)
        .assert()
        .success()
        .stdout(contains("processed sales file"))
        .stdout(contains("failed to parse sales JSON"))
        .stdout(contains("Processed 2 sales file(s)"));

    temp.child("salesTotalDir/totals.txt")
        .assert("22385.32\n");
    temp.child("salesTotalDir/salesReport.txt")
        .assert(contains("Total Sales: $22,385.32"))
        .assert(contains("  204/sales.json: Error parsing JSON"));
}

#[test]
fn second_run_appends_another_total() {
    let temp = TempDir::new().unwrap();
    temp.child("stores/sales.json")
        .write_str(r#"{"total": 3}"#)
        .unwrap();

    cli(&temp).assert().success();
    cli(&temp).assert().success();

    temp.child("salesTotalDir/totals.txt").assert("3\n3\n");
}

#[test]
fn environment_overrides_folders_and_currency() {
    let temp = TempDir::new().unwrap();
    temp.child("input/north/sales.json")
        .write_str(r#"{"total": 1000}"#)
        .unwrap();

    cli(&temp)
        .env("SALES_SUMMARY_STORES_DIR", "input")
        .env("SALES_SUMMARY_OUTPUT_DIR", "out")
        .env("SALES_SUMMARY_CURRENCY", "gbp")
        .assert()
        .success();

    temp.child("out/salesReport.txt")
        .assert(contains("Total Sales: £1,000.00"));
    temp.child("salesTotalDir").assert(predicates::path::missing());
}

#[test]
fn rejects_arguments() {
    let temp = TempDir::new().unwrap();
    cli(&temp)
        .arg("--verbose")
        .assert()
        .failure()
        .stderr(contains("Usage: sales_summary_cli"));
}

#[test]
fn unwritable_output_exits_non_zero() {
    let temp = TempDir::new().unwrap();
    temp.child("salesTotalDir").write_str("occupied").unwrap();

    cli(&temp)
        .assert()
        .failure()
        .stderr(contains("Error:"));
}
