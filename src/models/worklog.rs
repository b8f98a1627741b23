use crate::models::TimesheetEntry;
use chrono::{NaiveDate, NaiveTime};

/// A parsed row of a monthly worklog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorklogRow {
    pub resource_no: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub description: String,
}

impl WorklogRow {
    pub fn into_entry(self, personal_number: &str) -> TimesheetEntry {
        TimesheetEntry {
            personal_number: personal_number.to_string(),
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            description: self.description,
        }
    }
}
