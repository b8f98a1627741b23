pub mod employee;
pub mod entry;
pub mod issue;
pub mod worklog;

pub use employee::EmployeeRecord;
pub use entry::TimesheetEntry;
pub use issue::{Issue, ValidationError};
pub use worklog::WorklogRow;
