//! Collecting the monthly worklog files into timesheet entries.

use crate::config::Config;
use crate::core::roster::EmployeeMap;
use crate::errors::{AppError, AppResult};
use crate::models::{Issue, TimesheetEntry, WorklogRow};
use crate::schema::{Field, FileRole, ResolvedSchema, Schema, validate};
use crate::sheet::cell::{cell_date, cell_text, cell_time, is_blank};
use crate::sheet::{SheetTable, read_table};
use crate::utils::YearMonth;
use crate::utils::path::display_name;
use calamine::Data;
use std::fs;
use std::path::{Path, PathBuf};

/// Marker contained in the names of generated timesheets.
const OUTPUT_MARKER: &str = "eco2vetimesheet";

/// Per-file counters, shown by `check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub file_name: String,
    pub rows: usize,
    pub entries: usize,
    pub issues: usize,
    pub skipped: bool,
}

#[derive(Debug, Default)]
pub struct Aggregation {
    /// File enumeration order, then row order.
    pub entries: Vec<TimesheetEntry>,
    pub issues: Vec<Issue>,
    pub files: Vec<FileSummary>,
}

/// Worklog files of a month folder, sorted by name.
///
/// The roster, the template, earlier outputs and Office lock files are left out.
pub fn list_worklog_files(month_dir: &Path, cfg: &Config) -> AppResult<Vec<PathBuf>> {
    let roster = cfg.roster_file.to_lowercase();
    let template = cfg.template_file.to_lowercase();

    let mut files = Vec::new();
    for entry in fs::read_dir(month_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let is_xlsx = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));
        if !is_xlsx {
            continue;
        }

        let name = display_name(&path).to_lowercase();
        let excluded = name == roster
            || name == template
            || name.starts_with("~$")
            || name.contains(OUTPUT_MARKER)
            || is_generated_output(&name, cfg);
        if excluded {
            log::debug!("skipping {} (not a worklog)", path.display());
            continue;
        }

        files.push(path);
    }

    if files.is_empty() {
        return Err(AppError::NoWorklogFiles(month_dir.to_path_buf()));
    }

    files.sort_by_key(|p| display_name(p).to_lowercase());
    Ok(files)
}

/// True when `name` (lowercase) matches the output pattern for some month.
fn is_generated_output(name: &str, cfg: &Config) -> bool {
    let pattern = cfg.output_file_pattern.to_lowercase();
    let Some((prefix, suffix)) = pattern.split_once("{month}") else {
        return false;
    };
    name.strip_prefix(prefix)
        .and_then(|rest| rest.strip_suffix(suffix))
        .is_some_and(|month| month.parse::<YearMonth>().is_ok())
}

/// Read every file and join its rows with the roster.
///
/// Problems with single files or rows are recorded in the result and never
/// abort the whole aggregation.
pub fn aggregate(files: &[PathBuf], roster: &EmployeeMap, cfg: &Config) -> Aggregation {
    let mut out = Aggregation::default();

    for path in files {
        match read_table(path) {
            Ok(table) => aggregate_table(&table, roster, cfg, &mut out),
            Err(e) => {
                let file_name = display_name(path);
                log::warn!("{}: {}", file_name, e);
                out.issues.push(Issue::UnreadableFile {
                    file_name: file_name.clone(),
                    reason: e.to_string(),
                });
                out.files.push(FileSummary {
                    file_name,
                    rows: 0,
                    entries: 0,
                    issues: 1,
                    skipped: true,
                });
            }
        }
    }

    out
}

/// Add the rows of one worklog table to `out`.
pub fn aggregate_table(
    table: &SheetTable,
    roster: &EmployeeMap,
    cfg: &Config,
    out: &mut Aggregation,
) {
    let schema = Schema::for_role(FileRole::Worklog, cfg);
    let issues_before = out.issues.len();

    let resolved = match validate(table, &schema) {
        Ok(resolved) => resolved,
        Err(v) => {
            log::warn!("{}", v);
            out.issues.push(Issue::MissingColumns(v));
            out.files.push(FileSummary {
                file_name: table.file_name.clone(),
                rows: table.rows.len(),
                entries: 0,
                issues: 1,
                skipped: true,
            });
            return;
        }
    };

    let entries_before = out.entries.len();
    let mut rows = 0;
    let mut non_billable = 0;

    for (idx, row) in table.rows.iter().enumerate() {
        if row.iter().all(is_blank) {
            continue;
        }
        rows += 1;

        if !is_billable(row, &resolved, &cfg.billable_value) {
            non_billable += 1;
            continue;
        }

        let row_number = table.row_number(idx);
        let parsed = match parse_row(row, &resolved) {
            Ok(parsed) => parsed,
            Err((field, value)) => {
                out.issues.push(Issue::InvalidRow {
                    file_name: table.file_name.clone(),
                    row: row_number,
                    field: field.label().to_string(),
                    value,
                });
                continue;
            }
        };

        match roster.personal_number(&parsed.resource_no) {
            Some(personal_number) => out.entries.push(parsed.into_entry(personal_number)),
            None => out.issues.push(Issue::UnresolvedReference {
                file_name: table.file_name.clone(),
                row: row_number,
                resource_no: parsed.resource_no,
            }),
        }
    }

    if non_billable > 0 {
        out.issues.push(Issue::NonBillable {
            file_name: table.file_name.clone(),
            count: non_billable,
        });
    }

    let entries = out.entries.len() - entries_before;
    log::info!(
        "{}: {} row(s), {} entr{} transferred",
        table.file_name,
        rows,
        entries,
        if entries == 1 { "y" } else { "ies" }
    );

    out.files.push(FileSummary {
        file_name: table.file_name.clone(),
        rows,
        entries,
        issues: out.issues.len() - issues_before,
        skipped: false,
    });
}

/// Rows pass when the file has no hour type column or the value matches.
fn is_billable(row: &[Data], resolved: &ResolvedSchema, billable_value: &str) -> bool {
    if !resolved.has(Field::HourType) {
        return true;
    }
    cell_text(resolved.cell(row, Field::HourType)).eq_ignore_ascii_case(billable_value.trim())
}

/// Parse one data row; the error names the first unreadable field and its raw text.
fn parse_row(row: &[Data], resolved: &ResolvedSchema) -> Result<WorklogRow, (Field, String)> {
    let raw = |field: Field| cell_text(resolved.cell(row, field));

    let resource_no = raw(Field::ResourceNo);
    if resource_no.is_empty() {
        return Err((Field::ResourceNo, resource_no));
    }

    let date =
        cell_date(resolved.cell(row, Field::Date)).ok_or_else(|| (Field::Date, raw(Field::Date)))?;
    let start_time = cell_time(resolved.cell(row, Field::StartTime))
        .ok_or_else(|| (Field::StartTime, raw(Field::StartTime)))?;
    let end_time = cell_time(resolved.cell(row, Field::EndTime))
        .ok_or_else(|| (Field::EndTime, raw(Field::EndTime)))?;

    Ok(WorklogRow {
        resource_no,
        date,
        start_time,
        end_time,
        description: raw(Field::Description),
    })
}
