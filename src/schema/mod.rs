//! Typed description of the columns each input file must provide.
//!
//! A `Schema` maps semantic fields to the header names configured for a file
//! role. It is resolved once per file into a `ResolvedSchema` holding column
//! indices, so rows are read by field rather than by header lookups per cell.

pub mod validator;

use crate::config::{Config, RosterColumns, WorklogColumns};
use calamine::Data;
use std::collections::HashMap;

pub use validator::{header_matches, missing_columns, validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ResourceNo,
    PersonalNumber,
    Date,
    StartTime,
    EndTime,
    Description,
    HourType,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::ResourceNo => "resource number",
            Field::PersonalNumber => "personal number",
            Field::Date => "date",
            Field::StartTime => "start time",
            Field::EndTime => "end time",
            Field::Description => "description",
            Field::HourType => "hour type",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Roster,
    Worklog,
}

#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub field: Field,
    pub header: String,
    pub required: bool,
}

#[derive(Debug, Clone)]
pub struct Schema {
    pub role: FileRole,
    pub columns: Vec<ColumnSpec>,
}

impl Schema {
    pub fn roster(cols: &RosterColumns) -> Self {
        Self {
            role: FileRole::Roster,
            columns: vec![
                required(Field::ResourceNo, &cols.resource_no),
                required(Field::PersonalNumber, &cols.personal_number),
            ],
        }
    }

    pub fn worklog(cols: &WorklogColumns) -> Self {
        let mut columns = vec![
            required(Field::ResourceNo, &cols.resource_no),
            required(Field::Date, &cols.date),
            required(Field::StartTime, &cols.start_time),
            required(Field::EndTime, &cols.end_time),
            required(Field::Description, &cols.description),
        ];
        if let Some(hour_type) = &cols.hour_type {
            columns.push(ColumnSpec {
                field: Field::HourType,
                header: hour_type.clone(),
                required: false,
            });
        }
        Self {
            role: FileRole::Worklog,
            columns,
        }
    }

    pub fn for_role(role: FileRole, cfg: &Config) -> Self {
        match role {
            FileRole::Roster => Self::roster(&cfg.roster_columns),
            FileRole::Worklog => Self::worklog(&cfg.worklog_columns),
        }
    }

    pub fn required_headers(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.required)
            .map(|c| c.header.as_str())
            .collect()
    }

    /// Map every field whose header is present to its column index.
    /// Required fields are not checked here; see [`validate`].
    pub fn locate(&self, headers: &[String]) -> ResolvedSchema {
        let positions = self
            .columns
            .iter()
            .filter_map(|spec| {
                headers
                    .iter()
                    .position(|h| header_matches(h, &spec.header))
                    .map(|idx| (spec.field, idx))
            })
            .collect();
        ResolvedSchema { positions }
    }
}

fn required(field: Field, header: &str) -> ColumnSpec {
    ColumnSpec {
        field,
        header: header.to_string(),
        required: true,
    }
}

/// Column positions of one concrete file.
#[derive(Debug, Clone, Default)]
pub struct ResolvedSchema {
    positions: HashMap<Field, usize>,
}

impl ResolvedSchema {
    pub fn index(&self, field: Field) -> Option<usize> {
        self.positions.get(&field).copied()
    }

    pub fn has(&self, field: Field) -> bool {
        self.positions.contains_key(&field)
    }

    /// Cell of `field` in `row`; short rows yield `Data::Empty`.
    pub fn cell<'a>(&self, row: &'a [Data], field: Field) -> &'a Data {
        static EMPTY: Data = Data::Empty;
        self.index(field)
            .and_then(|idx| row.get(idx))
            .unwrap_or(&EMPTY)
    }
}
