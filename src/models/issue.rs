//! Non-fatal problems found while reading the inputs.
//! They are collected into the run report and shown next to the output path.

use std::collections::BTreeSet;
use std::fmt;

/// A file that lacks one or more required headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub file_name: String,
    pub missing_columns: BTreeSet<String>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols: Vec<&str> = self.missing_columns.iter().map(String::as_str).collect();
        write!(
            f,
            "{} is missing the required column(s): {}",
            self.file_name,
            cols.join(", ")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// The file was skipped entirely.
    MissingColumns(ValidationError),
    /// `row` is the 1-based spreadsheet row.
    UnresolvedReference {
        file_name: String,
        row: usize,
        resource_no: String,
    },
    InvalidRow {
        file_name: String,
        row: usize,
        field: String,
        value: String,
    },
    UnreadableFile {
        file_name: String,
        reason: String,
    },
    NonBillable {
        file_name: String,
        count: usize,
    },
}

impl Issue {
    /// Informational issues do not indicate lost data.
    pub fn is_error(&self) -> bool {
        !matches!(self, Issue::NonBillable { .. })
    }

    pub fn file_name(&self) -> &str {
        match self {
            Issue::MissingColumns(v) => &v.file_name,
            Issue::UnresolvedReference { file_name, .. }
            | Issue::InvalidRow { file_name, .. }
            | Issue::UnreadableFile { file_name, .. }
            | Issue::NonBillable { file_name, .. } => file_name,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::MissingColumns(v) => write!(f, "{v}"),
            Issue::UnresolvedReference {
                file_name,
                row,
                resource_no,
            } => write!(
                f,
                "{file_name}, row {row}: no personal number found for Resource No. '{resource_no}'"
            ),
            Issue::InvalidRow {
                file_name,
                row,
                field,
                value,
            } => write!(
                f,
                "{file_name}, row {row}: cannot read {field} from '{value}'"
            ),
            Issue::UnreadableFile { file_name, reason } => {
                write!(f, "{file_name} could not be read: {reason}")
            }
            Issue::NonBillable { file_name, count } => {
                write!(f, "{file_name}: {count} entries ignored (not billable)")
            }
        }
    }
}
