use assert_cmd::Command;
use predicates::prelude::*;

fn amort() -> Command {
    Command::cargo_bin("amort").unwrap()
}

#[test]
fn test_payment_from_flags_minimal() {
    amort()
        .args([
            "payment",
            "--principal",
            "30000.00",
            "--annual-rate",
            "0.03",
            "--term-months",
            "48",
            "--output",
            "minimal",
        ])
        .write_stdin("")
        .assert()
        .success()
        .stdout("664.03\n");
}

#[test]
fn test_schedule_from_stdin_json() {
    let output = amort()
        .arg("schedule")
        .write_stdin(r#"{"principal": "1000.00", "annual_rate": "0", "term_months": 3}"#)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = value["result"]["schedule"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2]["monthly_payment"], "333.34");
    assert_eq!(rows[2]["remaining_balance"], "0.00");
}

#[test]
fn test_public_schedule_hides_interest() {
    amort()
        .args(["schedule", "--principal", "1000", "--rate", "0.05", "--term", "1", "--public"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("interest_accrued").not())
        .stdout(predicate::str::contains("1004.17"));
}

#[test]
fn test_schedule_csv_has_one_line_per_month() {
    let output = amort()
        .args(["schedule", "--principal", "30000", "--rate", "0.03", "--term", "48", "--output", "csv"])
        .write_stdin("")
        .output()
        .unwrap();
    let text = String::from_utf8(output.stdout).unwrap();
    assert_eq!(text.lines().count(), 49);
    assert!(text.starts_with("month,"));
}

#[test]
fn test_summary_month_past_term() {
    amort()
        .args(["summary", "--principal", "1000", "--rate", "0.05", "--term", "12", "--month", "13"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds loan term"));
}

#[test]
fn test_summary_negative_month() {
    amort()
        .args(["summary", "--principal", "1000", "--rate", "0.05", "--term", "12", "--month", "-2"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));
}

#[test]
fn test_summary_month_from_stdin() {
    amort()
        .args(["summary", "--output", "minimal"])
        .write_stdin(r#"{"principal": "200000", "annual_rate": "0.03", "term_months": 48, "month": 48}"#)
        .assert()
        .success()
        .stdout("0.00\n");
}

#[test]
fn test_zero_rate_payment_prints_cents() {
    amort()
        .args(["payment", "--principal", "30000", "--rate", "0", "--term", "48", "--output", "minimal"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("625.00\n");
}

#[test]
fn test_summary_table_shows_cents() {
    amort()
        .args([
            "summary", "--principal", "30000", "--rate", "0.03", "--term", "48", "--month", "48", "--output",
            "table",
        ])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("30000.00"));
}

#[test]
fn test_fractional_cent_principal_rejected() {
    amort()
        .args(["payment", "--principal", "1000.005", "--rate", "0.03", "--term", "12"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("fractions of a cent"));
}

#[test]
fn test_term_beyond_limit_rejected() {
    amort()
        .args(["schedule", "--principal", "1000", "--rate", "0", "--term", "4294967295"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 1200 months"));
}

#[test]
fn test_invalid_principal_reported() {
    amort()
        .args(["payment", "--principal", "0", "--rate", "0.03", "--term", "12"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid principal"));
}

#[test]
fn test_missing_flag_reported() {
    amort()
        .args(["payment", "--principal", "1000"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--annual-rate is required"));
}
