//! Unified application error type.
//! Every stage of the pipeline (config, reader, roster, aggregation, writer)
//! returns AppError so the CLI has a single place to report fatal failures.
//! Non-fatal problems are collected as `models::Issue` instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Spreadsheet access
    // ---------------------------
    #[error("Cannot read spreadsheet '{file}': {reason}")]
    SheetRead { file: String, reason: String },

    #[error("Cannot write spreadsheet '{file}': {reason}")]
    SheetWrite { file: String, reason: String },

    // ---------------------------
    // Input layout
    // ---------------------------
    #[error("Required input not found: {}", format_paths(.0))]
    MissingPaths(Vec<PathBuf>),

    #[error("No worklog files were found in {0}")]
    NoWorklogFiles(PathBuf),

    #[error("File {file} is missing the required column(s): {}", .columns.join(", "))]
    MissingColumns { file: String, columns: Vec<String> },

    #[error(
        "Resource No. '{resource_no}' appears twice in {file} with different personal numbers ('{first}' and '{second}')"
    )]
    DuplicateKey {
        file: String,
        resource_no: String,
        first: String,
        second: String,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid month '{0}': expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Invalid column reference '{0}': expected a column letter such as A or AB")]
    InvalidColumn(String),

    // ---------------------------
    // Template / output
    // ---------------------------
    #[error("Unexpected template layout: {0}")]
    Template(String),

    #[error("Output not written: {0}")]
    OutputRefused(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type AppResult<T> = Result<T, AppError>;
