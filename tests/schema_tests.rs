use eco2ve_timesheet::config::{Config, WorklogColumns};
use eco2ve_timesheet::export::column_index;
use eco2ve_timesheet::schema::{Field, FileRole, Schema, missing_columns, validate};
use eco2ve_timesheet::sheet::SheetTable;

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_missing_columns_lists_absent_names_in_order() {
    let found = headers(&["Resource No.", "Start Time"]);
    let missing = missing_columns(&found, &["Resource No.", "Date", "Start Time", "End Time"]);
    assert_eq!(missing, ["Date", "End Time"]);
}

#[test]
fn test_missing_columns_ignores_case_and_padding() {
    let found = headers(&[" resource no. ", "PERSONAL NUMBER"]);
    assert!(missing_columns(&found, &["Resource No.", "Personal Number"]).is_empty());
}

#[test]
fn test_hour_type_is_optional() {
    let schema = Schema::for_role(FileRole::Worklog, &Config::default());
    assert!(!schema.required_headers().contains(&"Hour Type"));

    let with = schema.locate(&headers(&[
        "Resource No.",
        "Date",
        "Start Time",
        "End Time",
        "Text/Description",
        "Hour Type",
    ]));
    assert_eq!(with.index(Field::HourType), Some(5));

    let without = Schema::worklog(&WorklogColumns {
        hour_type: None,
        ..WorklogColumns::default()
    });
    assert!(without.columns.iter().all(|c| c.field != Field::HourType));
}

#[test]
fn test_validate_reports_file_and_columns() {
    let table = SheetTable::from_rows("roster.xlsx", 1, Vec::new());
    let schema = Schema::for_role(FileRole::Roster, &Config::default());

    let err = validate(&table, &schema).unwrap_err();
    assert_eq!(err.file_name, "roster.xlsx");
    assert_eq!(
        err.missing_columns.iter().collect::<Vec<_>>(),
        ["Personal Number", "Resource No."]
    );
    assert_eq!(
        err.to_string(),
        "roster.xlsx is missing the required column(s): Personal Number, Resource No."
    );
}

#[test]
fn test_column_letters() {
    assert_eq!(column_index("A").unwrap(), 0);
    assert_eq!(column_index("n").unwrap(), 13);
    assert_eq!(column_index("AA").unwrap(), 26);
    assert_eq!(column_index("XFD").unwrap(), 16_383);
    assert!(column_index("").is_err());
    assert!(column_index("A1").is_err());
    assert!(column_index("XFE").is_err());
}
