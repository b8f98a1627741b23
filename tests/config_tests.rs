use eco2ve_timesheet::config::{Config, DuplicatePolicy};
use eco2ve_timesheet::errors::AppError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let cfg = Config::load(Some(&dir.path().join("none.conf"))).unwrap();

    assert_eq!(cfg.roster_file, "Employees.xlsx");
    assert_eq!(cfg.template.first_data_row, 3);
    assert_eq!(cfg.duplicate_policy, DuplicatePolicy::Error);
    assert_eq!(cfg.output_file_name("2025-10"), "2025-10-eco2veTimeSheet.xlsx");
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("e2t.conf");
    fs::write(
        &path,
        "roster_columns:\n  personal_number: Pers.Nr.\nduplicate_policy: last_wins\ntemplate:\n  first_data_row: 5\n",
    )
    .unwrap();

    let cfg = Config::load(Some(&path)).unwrap();
    assert_eq!(cfg.roster_columns.personal_number, "Pers.Nr.");
    assert_eq!(cfg.roster_columns.resource_no, "Resource No.");
    assert_eq!(cfg.duplicate_policy, DuplicatePolicy::LastWins);
    assert_eq!(cfg.template.first_data_row, 5);
    assert_eq!(cfg.template.description_column, "N");
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("e2t.conf");

    fs::write(&path, "output_file_pattern: timesheet.xlsx\n").unwrap();
    assert!(matches!(Config::load(Some(&path)), Err(AppError::Config(_))));

    fs::write(&path, "template:\n  first_data_row: 0\n").unwrap();
    assert!(matches!(Config::load(Some(&path)), Err(AppError::Config(_))));

    fs::write(&path, "duplicate_policy: sometimes\n").unwrap();
    assert!(matches!(Config::load(Some(&path)), Err(AppError::ConfigParse(_))));
}

#[test]
fn test_init_writes_loadable_defaults_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("e2t.conf");

    assert_eq!(Config::init(Some(&path)).unwrap(), path);
    let cfg = Config::load(Some(&path)).unwrap();
    assert_eq!(cfg.template.fixed_cells, Config::default().template.fixed_cells);

    assert!(matches!(Config::init(Some(&path)), Err(AppError::Config(_))));
}
