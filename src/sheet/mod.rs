//! Reading `.xlsx` inputs with calamine.
//!
//! Worklogs and the roster are plain tables: the first non-empty row of the
//! first worksheet holds the headers, every following row is data.

pub mod cell;
pub mod excel_date;

use crate::errors::{AppError, AppResult};
use crate::utils::path::display_name;
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

/// Header row plus data rows of a worksheet.
#[derive(Debug, Clone)]
pub struct SheetTable {
    pub file_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Data>>,
    /// 1-based spreadsheet row of the header line.
    header_row: usize,
}

impl SheetTable {
    pub fn from_rows(file_name: &str, header_row: usize, mut grid: Vec<Vec<Data>>) -> Self {
        let headers = if grid.is_empty() {
            Vec::new()
        } else {
            grid.remove(0).iter().map(cell::cell_text).collect()
        };

        Self {
            file_name: file_name.to_string(),
            headers,
            rows: grid,
            header_row,
        }
    }

    /// 1-based spreadsheet row of the data row at `index`.
    pub fn row_number(&self, index: usize) -> usize {
        self.header_row + 1 + index
    }
}

/// Read the first worksheet of `path` as a table.
pub fn read_table(path: &Path) -> AppResult<SheetTable> {
    let file_name = display_name(path);
    let read_err = |reason: String| AppError::SheetRead {
        file: file_name.clone(),
        reason,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| read_err(e.to_string()))?;

    let first = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| read_err("workbook contains no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&first)
        .map_err(|e| read_err(format!("sheet '{first}': {e}")))?;

    let header_row = range.start().map(|(r, _)| r as usize + 1).unwrap_or(1);
    let grid: Vec<Vec<Data>> = range.rows().map(|r| r.to_vec()).collect();

    log::debug!(
        "{file_name}: sheet '{first}' with {} row(s) starting at row {header_row}",
        grid.len()
    );

    Ok(SheetTable::from_rows(&file_name, header_row, grid))
}
