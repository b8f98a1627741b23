use calamine::Data;
use eco2ve_timesheet::config::{Config, DuplicatePolicy};
use eco2ve_timesheet::core::EmployeeMap;
use eco2ve_timesheet::errors::AppError;
use eco2ve_timesheet::models::EmployeeRecord;
use eco2ve_timesheet::sheet::SheetTable;

fn rec(res: &str, pers: &str) -> EmployeeRecord {
    EmployeeRecord::new(res.to_string(), pers.to_string())
}

fn s(v: &str) -> Data {
    Data::String(v.to_string())
}

#[test]
fn test_conflicting_duplicate_is_an_error_by_default() {
    let records = vec![rec("R1", "P1"), rec("R1", "P2")];
    let err = EmployeeMap::from_records("Employees.xlsx", records, DuplicatePolicy::default())
        .unwrap_err();

    match err {
        AppError::DuplicateKey {
            resource_no,
            first,
            second,
            ..
        } => {
            assert_eq!(resource_no, "R1");
            assert_eq!(first, "P1");
            assert_eq!(second, "P2");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_identical_duplicates_are_accepted() {
    let map = EmployeeMap::from_records(
        "Employees.xlsx",
        vec![rec("R1", "P1"), rec(" R1 ", "P1")],
        DuplicatePolicy::Error,
    )
    .unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.personal_number("R1"), Some("P1"));
}

#[test]
fn test_duplicate_policies() {
    let records = || vec![rec("R1", "P1"), rec("R2", "P7"), rec("R1", "P2")];

    let first = EmployeeMap::from_records("x", records(), DuplicatePolicy::FirstWins).unwrap();
    assert_eq!(first.personal_number("R1"), Some("P1"));

    let last = EmployeeMap::from_records("x", records(), DuplicatePolicy::LastWins).unwrap();
    assert_eq!(last.personal_number("R1"), Some("P2"));
    assert_eq!(last.personal_number("R2"), Some("P7"));
    assert_eq!(last.personal_number("R3"), None);
}

#[test]
fn test_roster_from_sheet() {
    let table = SheetTable::from_rows(
        "Employees.xlsx",
        1,
        vec![
            vec![s("Name"), s("resource no."), s("Personal Number ")],
            vec![s("Jane"), Data::Float(4711.0), s("P100")],
            vec![s("John"), Data::Empty, s("P200")],
            vec![s("Jim"), s("R3"), Data::Empty],
        ],
    );

    let map = EmployeeMap::from_table(&table, &Config::default()).unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.personal_number("4711"), Some("P100"));
}

#[test]
fn test_roster_without_personal_number_column_fails() {
    let table = SheetTable::from_rows(
        "Employees.xlsx",
        1,
        vec![vec![s("Resource No."), s("Pers.Nr.")], vec![s("R1"), s("P1")]],
    );

    let err = EmployeeMap::from_table(&table, &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        AppError::MissingColumns { ref columns, .. } if columns == &["Personal Number"]
    ));
}
