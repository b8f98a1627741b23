//! End-to-end run: locate inputs, load the roster, aggregate the month's
//! worklogs and write the timesheet.
//!
//! Missing top-level inputs abort the run. Everything that goes wrong inside a
//! single worklog file is returned as an [`Issue`] next to the output path.

use crate::config::Config;
use crate::core::aggregate::{Aggregation, FileSummary, aggregate, list_worklog_files};
use crate::core::roster::EmployeeMap;
use crate::errors::{AppError, AppResult};
use crate::export::{OverwriteMode, Template, ensure_writable, plan_rows, write_timesheet};
use crate::models::{Issue, TimesheetEntry};
use crate::utils::YearMonth;
use crate::utils::path::expand_tilde;
use std::path::{Path, PathBuf};

/// Paths every run needs.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub base_dir: PathBuf,
    pub roster: PathBuf,
    pub template: PathBuf,
    pub month_dir: PathBuf,
}

impl Inputs {
    /// Resolve and check the inputs below `base_dir`.
    ///
    /// A missing base folder is reported alone; otherwise every missing file
    /// or folder is collected into one error.
    pub fn locate(base_dir: &Path, month: YearMonth, cfg: &Config) -> AppResult<Self> {
        if !base_dir.is_dir() {
            return Err(AppError::MissingPaths(vec![base_dir.to_path_buf()]));
        }

        let inputs = Self {
            base_dir: base_dir.to_path_buf(),
            roster: base_dir.join(&cfg.roster_file),
            template: base_dir.join(&cfg.template_file),
            month_dir: base_dir.join(month.to_string()),
        };

        let mut missing = Vec::new();
        if !inputs.roster.is_file() {
            missing.push(inputs.roster.clone());
        }
        if !inputs.template.is_file() {
            missing.push(inputs.template.clone());
        }
        if !inputs.month_dir.is_dir() {
            missing.push(inputs.month_dir.clone());
        }

        if missing.is_empty() {
            Ok(inputs)
        } else {
            Err(AppError::MissingPaths(missing))
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunRequest {
    pub base_dir: PathBuf,
    pub month: YearMonth,
    pub overwrite: OverwriteMode,
    /// Order entries by date, personal number and start time before writing.
    pub sort: bool,
}

impl RunRequest {
    pub fn new(base_dir: impl Into<PathBuf>, month: YearMonth) -> Self {
        Self {
            base_dir: base_dir.into(),
            month,
            overwrite: OverwriteMode::default(),
            sort: false,
        }
    }
}

/// Inputs read and joined, template checked, nothing written yet.
#[derive(Debug)]
pub struct Prepared {
    pub inputs: Inputs,
    pub employees: usize,
    pub aggregation: Aggregation,
    pub template: Template,
    /// 1-based row the first entry will go to.
    pub first_row: u32,
}

impl Prepared {
    pub fn output_path(&self, month: YearMonth, cfg: &Config) -> PathBuf {
        self.inputs
            .month_dir
            .join(cfg.output_file_name(&month.to_string()))
    }
}

#[derive(Debug)]
pub struct RunReport {
    pub month: YearMonth,
    pub output_path: PathBuf,
    pub entries_written: usize,
    /// 1-based row of the first written entry.
    pub first_row: u32,
    pub issues: Vec<Issue>,
    pub files: Vec<FileSummary>,
}

impl RunReport {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(Issue::is_error)
    }
}

/// Everything up to (not including) writing: used by `check` and by [`run`].
pub fn prepare(req: &RunRequest, cfg: &Config) -> AppResult<Prepared> {
    let inputs = Inputs::locate(&req.base_dir, req.month, cfg)?;
    log::info!("using month folder {}", inputs.month_dir.display());

    let template = Template::load(&inputs.template, &cfg.template)?;
    let (_, first_row) = plan_rows(&template, &cfg.template)?;

    let roster = EmployeeMap::load(&inputs.roster, cfg)?;
    let files = list_worklog_files(&inputs.month_dir, cfg)?;
    let aggregation = aggregate(&files, &roster, cfg);

    Ok(Prepared {
        inputs,
        employees: roster.len(),
        aggregation,
        template,
        first_row,
    })
}

pub fn run(req: &RunRequest, cfg: &Config) -> AppResult<RunReport> {
    let prepared = prepare(req, cfg)?;
    let output_path = prepared.output_path(req.month, cfg);
    let Prepared {
        aggregation,
        mut template,
        ..
    } = prepared;

    let Aggregation {
        mut entries,
        issues,
        files,
    } = aggregation;

    if req.sort || cfg.sort_entries {
        sort_entries(&mut entries);
    }

    ensure_writable(&output_path, req.overwrite)?;

    let written = write_timesheet(&mut template, &entries, &cfg.template, &output_path)?;

    Ok(RunReport {
        month: req.month,
        output_path,
        entries_written: written.rows,
        first_row: written.first_row,
        issues,
        files,
    })
}

/// Single entry point for wrappers: base folder as typed by the user, month
/// `YYYY-MM` (current month when `None`). Existing output is replaced only
/// with `force`.
pub fn generate(
    base_dir: &str,
    month: Option<&str>,
    cfg: &Config,
    force: bool,
) -> AppResult<RunReport> {
    let month = match month {
        Some(m) => m.parse::<YearMonth>()?,
        None => YearMonth::current(),
    };

    let mut req = RunRequest::new(expand_tilde(base_dir), month);
    if force {
        req.overwrite = OverwriteMode::Force;
    }
    run(&req, cfg)
}

/// Stable ordering by date, personal number and start time.
pub fn sort_entries(entries: &mut [TimesheetEntry]) {
    entries.sort_by(|a, b| {
        (a.date, &a.personal_number, a.start_time).cmp(&(b.date, &b.personal_number, b.start_time))
    });
}
