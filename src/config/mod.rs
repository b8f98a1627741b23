use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// How the roster treats a Resource No. that appears more than once with
/// different personal numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    #[default]
    Error,
    FirstWins,
    LastWins,
}

/// Header names inside the employee roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterColumns {
    pub resource_no: String,
    pub personal_number: String,
}

impl Default for RosterColumns {
    fn default() -> Self {
        Self {
            resource_no: "Resource No.".to_string(),
            personal_number: "Personal Number".to_string(),
        }
    }
}

/// Header names inside the monthly worklog files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorklogColumns {
    pub resource_no: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    /// Optional column; when present only billable rows are transferred.
    pub hour_type: Option<String>,
}

impl Default for WorklogColumns {
    fn default() -> Self {
        Self {
            resource_no: "Resource No.".to_string(),
            date: "Date".to_string(),
            start_time: "Start Time".to_string(),
            end_time: "End Time".to_string(),
            description: "Text/Description".to_string(),
            hour_type: Some("Hour Type".to_string()),
        }
    }
}

/// A constant written on every data row (e.g. project and activity codes).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixedCell {
    pub column: String,
    pub value: String,
}

/// Where the timesheet data lives inside the template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateLayout {
    /// Target sheet; the first sheet when unset.
    pub sheet: Option<String>,
    /// 1-based row of the first data line.
    pub first_data_row: u32,
    pub personal_number_column: String,
    pub date_column: String,
    pub start_time_column: String,
    pub end_time_column: String,
    pub description_column: String,
    pub fixed_cells: Vec<FixedCell>,
    pub date_format: String,
    pub time_format: String,
}

impl Default for TemplateLayout {
    fn default() -> Self {
        Self {
            sheet: None,
            first_data_row: 3,
            personal_number_column: "A".to_string(),
            date_column: "B".to_string(),
            start_time_column: "H".to_string(),
            end_time_column: "I".to_string(),
            description_column: "N".to_string(),
            fixed_cells: vec![
                FixedCell {
                    column: "D".to_string(),
                    value: "P.0785215.1.02 ".to_string(),
                },
                FixedCell {
                    column: "E".to_string(),
                    value: "AN03".to_string(),
                },
            ],
            date_format: "yyyy-mm-dd".to_string(),
            time_format: "hh:mm".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub roster_file: String,
    pub template_file: String,
    /// `{month}` is replaced with the target month (YYYY-MM).
    pub output_file_pattern: String,
    pub roster_columns: RosterColumns,
    pub worklog_columns: WorklogColumns,
    pub billable_value: String,
    pub duplicate_policy: DuplicatePolicy,
    pub sort_entries: bool,
    pub template: TemplateLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_file: "Employees.xlsx".to_string(),
            template_file: "eco2ve_TimeSheet.xlsx".to_string(),
            output_file_pattern: "{month}-eco2veTimeSheet.xlsx".to_string(),
            roster_columns: RosterColumns::default(),
            worklog_columns: WorklogColumns::default(),
            billable_value: "billable".to_string(),
            duplicate_policy: DuplicatePolicy::default(),
            sort_entries: false,
            template: TemplateLayout::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("eco2ve-timesheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".eco2ve-timesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("eco2ve-timesheet.conf")
    }

    /// Load configuration from `path` (or the standard location), falling back
    /// to defaults when no file exists.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            log::debug!("no configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        log::debug!("loading configuration from {}", path.display());
        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the default configuration to `path` (or the standard location).
    /// An existing file is left untouched.
    pub fn init(path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if path.exists() {
            return Err(AppError::Config(format!(
                "{} already exists",
                path.display()
            )));
        }

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        fs::write(&path, Self::default().to_yaml()?)?;
        Ok(path)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Output file name for the given month, e.g. `2025-10-eco2veTimeSheet.xlsx`.
    pub fn output_file_name(&self, month: &str) -> String {
        self.output_file_pattern.replace("{month}", month)
    }

    fn validate(&self) -> AppResult<()> {
        if self.template.first_data_row == 0 {
            return Err(AppError::Config(
                "template.first_data_row is 1-based and must be at least 1".to_string(),
            ));
        }
        if !self.output_file_pattern.contains("{month}") {
            return Err(AppError::Config(
                "output_file_pattern must contain the {month} placeholder".to_string(),
            ));
        }
        Ok(())
    }
}
