use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn almanac() -> Command {
    let mut cmd = Command::cargo_bin("almanac").unwrap();
    cmd.env_remove("ALMANAC_DEFINITIONS").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_codes_lists_standard_calendars() {
    almanac()
        .args(["codes", "--format", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GBLO"))
        .stdout(predicate::str::contains("NYSE"))
        .stdout(predicate::str::contains("EUTA"));
}

#[test]
fn test_check_substituted_christmas() {
    almanac()
        .args(["check", "GBLO", "2010-12-27", "-f", "minimal"])
        .assert()
        .success()
        .stdout("false\n");

    almanac()
        .args(["check", "GBLO", "2010-12-29", "-f", "minimal"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_check_table_reports_reason() {
    almanac()
        .args(["check", "FRPA", "2005-05-08"])
        .assert()
        .success()
        .stdout(predicate::str::contains("weekend"));
}

#[test]
fn test_check_at_range_edges() {
    // Next business day would fall in 2100, outside the generated range
    almanac()
        .args(["check", "GBLO", "2099-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is a business day"));

    let output = almanac()
        .args(["check", "GBLO", "2099-12-31", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let value = |key: &str| {
        rows.as_array()
            .unwrap()
            .iter()
            .find(|row| row["key"] == key)
            .map(|row| row["value"].as_str().unwrap().to_string())
            .unwrap()
    };
    assert_eq!(value("Next business day"), "-");
    assert_eq!(value("Previous business day"), "2099-12-30");

    // Previous business day would fall in 1949
    almanac()
        .args(["check", "GBLO", "1950-01-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1950-01-03"));
}

#[test]
fn test_check_joint_calendar() {
    // Thanksgiving is a New York holiday only
    almanac()
        .args(["check", "gblo+usny", "2015-11-26", "-f", "minimal"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_holidays_json() {
    let output = almanac()
        .args(["holidays", "NYSE", "--year", "2012", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let dates: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["date"].as_str().unwrap())
        .collect();
    assert!(dates.contains(&"2012-04-06"));
    assert!(dates.contains(&"2012-12-25"));
    assert!(!dates.contains(&"2012-10-08"));
}

#[test]
fn test_holidays_csv() {
    almanac()
        .args(["holidays", "GBLO", "-y", "1965", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("weekday,date\n"))
        .stdout(predicate::str::contains("Mon,1965-08-30"));
}

#[test]
fn test_shift_over_christmas() {
    almanac()
        .args(["shift", "USNY", "2015-12-24", "1", "-f", "minimal"])
        .assert()
        .success()
        .stdout("2015-12-28\n");

    almanac()
        .args(["shift", "USNY", "2015-12-28", "-1", "-f", "minimal"])
        .assert()
        .success()
        .stdout("2015-12-24\n");
}

#[test]
fn test_adjust_conventions() {
    almanac()
        .args(["adjust", "EUTA", "2015-05-01", "-f", "minimal"])
        .assert()
        .success()
        .stdout("2015-05-04\n");

    almanac()
        .args(["adjust", "EUTA", "2015-05-01", "-c", "preceding", "-f", "minimal"])
        .assert()
        .success()
        .stdout("2015-04-30\n");

    almanac()
        .args(["adjust", "EUTA", "2015-05-01", "-c", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Modified Following"));
}

#[test]
fn test_easter_range() {
    almanac()
        .args(["easter", "2024", "--to", "2025", "-f", "minimal"])
        .assert()
        .success()
        .stdout("2024-03-31\n2025-04-20\n");
}

#[test]
fn test_errors() {
    almanac()
        .args(["check", "XXXX", "2015-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown calendar"));

    almanac()
        .args(["check", "GBLO", "01/02/2015"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));

    almanac()
        .args(["check", "GBLO", "2100-01-04"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside calendar"));

    almanac()
        .args(["adjust", "GBLO", "2015-01-01", "-c", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown business day convention"));

    almanac()
        .args(["easter", "1500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside 1583..=9999"));

    almanac()
        .args(["easter", "9999", "--to", "10000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside 1583..=9999"));
}

#[test]
fn test_definitions_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{
            "code": "XMPL",
            "name": "Example exchange",
            "start_year": 2020,
            "end_year": 2030,
            "rules": [
                {{"rule": {{"kind": {{"fixed_date": {{"month": 7, "day": 4}}}}}}, "policy": "roll_to_monday"}}
            ]
        }}"#
    )?;

    // 2021-07-04 is a Sunday
    almanac()
        .arg("--definitions")
        .arg(file.path())
        .args(["check", "XMPL", "2021-07-05", "-f", "minimal"])
        .assert()
        .success()
        .stdout("false\n");

    almanac()
        .arg("--definitions")
        .arg(file.path())
        .args(["codes", "-f", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("XMPL"))
        .stdout(predicate::str::contains("GBLO"));

    Ok(())
}
