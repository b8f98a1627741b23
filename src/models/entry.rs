use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// A worklog line joined with the roster, ready to be written to the timesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimesheetEntry {
    pub personal_number: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub description: String,
}
