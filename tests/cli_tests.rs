mod common;

use common::{Fixture, MONTH, e2t, worklog_header, worklog_row};
use predicates::str::contains;

fn filled_fixture() -> Fixture {
    let fx = Fixture::new(&[("R1", "P100"), ("R2", "P200")]);
    fx.add_worklog(
        "worklogs.xlsx",
        vec![
            worklog_header(),
            worklog_row("R1", "2025-10-01", "08:00", "12:00", "Analysis"),
            worklog_row("R9", "2025-10-02", "09:00", "10:00", "Unknown"),
        ],
    );
    fx
}

/// Configuration path that does not exist, so every run uses the defaults.
fn no_config(fx: &Fixture) -> String {
    fx.base().join("absent.conf").to_string_lossy().to_string()
}

#[test]
fn test_generate_writes_output_and_reports_unresolved() {
    let fx = filled_fixture();

    e2t()
        .args(["--config", &no_config(&fx), "generate", &fx.base_str()])
        .args(["--month", MONTH, "--force"])
        .assert()
        .success()
        .stdout(contains("TimeSheet has been generated"))
        .stdout(contains("1 entries from row 3"))
        .stdout(contains("no personal number found for Resource No. 'R9'"));

    assert!(fx.output_path().is_file());
}

#[test]
fn test_generate_missing_base_folder_fails() {
    let fx = Fixture::empty();
    let gone = fx.base().join("nowhere");

    e2t()
        .args(["--config", &no_config(&fx), "generate"])
        .arg(&gone)
        .args(["--month", MONTH, "--force"])
        .assert()
        .failure()
        .stderr(contains("Required input not found"));
}

#[test]
fn test_generate_rejects_bad_month() {
    let fx = filled_fixture();

    e2t()
        .args(["--config", &no_config(&fx), "generate", &fx.base_str()])
        .args(["--month", "10-2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid month '10-2025'"));
}

#[test]
fn test_check_lists_files_without_writing() {
    let fx = filled_fixture();

    e2t()
        .args(["--config", &no_config(&fx), "check", &fx.base_str()])
        .args(["--month", MONTH])
        .assert()
        .success()
        .stdout(contains("2 employee(s) in Employees.xlsx"))
        .stdout(contains("worklogs.xlsx"))
        .stdout(contains("1 entries ready for"));

    assert!(!fx.output_path().exists());
}

#[test]
fn test_config_print_shows_defaults() {
    let fx = Fixture::empty();

    e2t()
        .args(["--config", &no_config(&fx), "config", "--print"])
        .assert()
        .success()
        .stdout(contains("does not exist, showing defaults"))
        .stdout(contains("roster_file: Employees.xlsx"))
        .stdout(contains("duplicate_policy: error"));
}

#[test]
fn test_config_init_creates_file_once() {
    let fx = Fixture::empty();
    let path = no_config(&fx);

    e2t()
        .args(["--config", &path, "config", "--init"])
        .assert()
        .success()
        .stdout(contains("Config file:"));
    assert!(fx.base().join("absent.conf").is_file());

    e2t()
        .args(["--config", &path, "config", "--init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_check_reports_where_entries_go() {
    let fx = filled_fixture();

    e2t()
        .args(["--config", &no_config(&fx), "check", &fx.base_str()])
        .args(["--month", MONTH])
        .assert()
        .success()
        .stdout(contains("(sheet 'TimeSheet', from row 3)"));
}

#[test]
fn test_check_fails_on_unknown_template_sheet() {
    let fx = filled_fixture();
    let conf = fx.base().join("e2t.conf");
    std::fs::write(&conf, "template:\n  sheet: Stunden\n").unwrap();

    e2t()
        .args(["--config"])
        .arg(&conf)
        .args(["check", &fx.base_str(), "--month", MONTH])
        .assert()
        .failure()
        .stderr(contains("sheet 'Stunden' not found"));
}
