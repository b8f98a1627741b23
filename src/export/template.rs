//! The timesheet template, loaded as an editable workbook.
//!
//! Entries are written into the loaded workbook and the whole package is
//! saved under the output name, so styles, merged ranges, column widths and
//! everything else the template carries stay as they are.

use crate::config::TemplateLayout;
use crate::errors::{AppError, AppResult};
use crate::utils::path::display_name;
use std::fmt;
use std::path::Path;
use umya_spreadsheet::{Cell, Spreadsheet, Worksheet};

pub struct Template {
    pub file_name: String,
    book: Spreadsheet,
    target: String,
}

impl Template {
    pub fn load(path: &Path, layout: &TemplateLayout) -> AppResult<Self> {
        let file_name = display_name(path);
        let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|e| AppError::SheetRead {
            file: file_name.clone(),
            reason: e.to_string(),
        })?;
        Self::from_book(&file_name, book, layout)
    }

    /// Select the target sheet named by `layout` (first sheet by default).
    pub fn from_book(file_name: &str, book: Spreadsheet, layout: &TemplateLayout) -> AppResult<Self> {
        let names: Vec<String> = book
            .get_sheet_collection()
            .iter()
            .map(|s| s.get_name().to_string())
            .collect();

        let target = match &layout.sheet {
            None => names
                .first()
                .cloned()
                .ok_or_else(|| AppError::Template(format!("{file_name} contains no sheets")))?,
            Some(wanted) if names.contains(wanted) => wanted.clone(),
            Some(wanted) => {
                return Err(AppError::Template(format!(
                    "sheet '{wanted}' not found in {file_name} (available: {})",
                    names.join(", ")
                )));
            }
        };

        Ok(Self {
            file_name: file_name.to_string(),
            book,
            target,
        })
    }

    pub fn target_name(&self) -> &str {
        &self.target
    }

    fn target(&self) -> AppResult<&Worksheet> {
        self.book
            .get_sheet_by_name(&self.target)
            .ok_or_else(|| self.sheet_missing())
    }

    pub(crate) fn target_mut(&mut self) -> AppResult<&mut Worksheet> {
        let missing = self.sheet_missing();
        self.book
            .get_sheet_by_name_mut(&self.target)
            .ok_or(missing)
    }

    fn sheet_missing(&self) -> AppError {
        AppError::Template(format!(
            "sheet '{}' not found in {}",
            self.target, self.file_name
        ))
    }

    /// Last 1-based row with a value or formula in one of `columns` (zero-based).
    /// Formatting alone does not count.
    pub fn last_used_row(&self, columns: &[u16]) -> AppResult<Option<u32>> {
        let sheet = self.target()?;
        let last = (1..=sheet.get_highest_row()).rev().find(|&row| {
            columns.iter().any(|&col| {
                sheet
                    .get_cell((u32::from(col) + 1, row))
                    .is_some_and(has_content)
            })
        });
        Ok(last)
    }

    /// 1-based row where the entries start: `first_data_row`, or the row after
    /// the last one already filled in `columns` if that is further down.
    pub fn first_free_row(&self, columns: &[u16], first_data_row: u32) -> AppResult<u32> {
        let first = first_data_row.max(1);
        Ok(match self.last_used_row(columns)? {
            Some(last) if last >= first => last + 1,
            _ => first,
        })
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        umya_spreadsheet::writer::xlsx::write(&self.book, path).map_err(|e| AppError::SheetWrite {
            file: display_name(path),
            reason: e.to_string(),
        })
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("file_name", &self.file_name)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

fn has_content(cell: &Cell) -> bool {
    !cell.get_value().trim().is_empty() || !cell.get_formula().is_empty()
}

/// Zero-based index of a column letter (`A` → 0, `AA` → 26).
pub fn column_index(letters: &str) -> AppResult<u16> {
    let letters = letters.trim();
    if letters.is_empty() || letters.len() > 3 {
        return Err(AppError::InvalidColumn(letters.to_string()));
    }

    let mut index: u32 = 0;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() {
            return Err(AppError::InvalidColumn(letters.to_string()));
        }
        index = index * 26 + (ch.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
    }

    // XFD is the last column Excel supports
    if index > 16_384 {
        return Err(AppError::InvalidColumn(letters.to_string()));
    }
    Ok((index - 1) as u16)
}
