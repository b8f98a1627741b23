//! Writing the entries into the template's data region.

use crate::config::TemplateLayout;
use crate::errors::AppResult;
use crate::export::template::{Template, column_index};
use crate::models::TimesheetEntry;
use crate::sheet::excel_date::{date_to_serial, time_to_serial};
use std::path::Path;
use umya_spreadsheet::Worksheet;

/// Column positions resolved from the layout letters, zero-based.
#[derive(Debug, Clone)]
pub struct DataColumns {
    personal_number: u16,
    date: u16,
    start_time: u16,
    end_time: u16,
    description: u16,
    fixed: Vec<(u16, String)>,
}

impl DataColumns {
    pub fn resolve(layout: &TemplateLayout) -> AppResult<Self> {
        let fixed = layout
            .fixed_cells
            .iter()
            .map(|f| Ok((column_index(&f.column)?, f.value.clone())))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            personal_number: column_index(&layout.personal_number_column)?,
            date: column_index(&layout.date_column)?,
            start_time: column_index(&layout.start_time_column)?,
            end_time: column_index(&layout.end_time_column)?,
            description: column_index(&layout.description_column)?,
            fixed,
        })
    }

    /// Every column an entry writes to.
    pub fn written(&self) -> Vec<u16> {
        let mut cols = vec![
            self.personal_number,
            self.date,
            self.start_time,
            self.end_time,
            self.description,
        ];
        cols.extend(self.fixed.iter().map(|(col, _)| *col));
        cols
    }
}

/// Where the entries ended up, 1-based rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrittenRange {
    pub first_row: u32,
    pub rows: usize,
}

/// Resolve the layout against `template` and return the first row entries go to.
pub fn plan_rows(template: &Template, layout: &TemplateLayout) -> AppResult<(DataColumns, u32)> {
    let columns = DataColumns::resolve(layout)?;
    let first_row = template.first_free_row(&columns.written(), layout.first_data_row)?;
    Ok((columns, first_row))
}

/// Fill `entries` into the target sheet of `template` and save it as `output`.
pub fn write_timesheet(
    template: &mut Template,
    entries: &[TimesheetEntry],
    layout: &TemplateLayout,
    output: &Path,
) -> AppResult<WrittenRange> {
    let (columns, first_row) = plan_rows(template, layout)?;

    let sheet = template.target_mut()?;
    for (offset, entry) in entries.iter().enumerate() {
        write_entry(sheet, first_row + offset as u32, entry, &columns, layout);
    }

    template.save(output)?;
    log::info!(
        "{} entr{} written to {} from row {}",
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" },
        output.display(),
        first_row
    );

    Ok(WrittenRange {
        first_row,
        rows: entries.len(),
    })
}

fn write_entry(
    sheet: &mut Worksheet,
    row: u32,
    entry: &TimesheetEntry,
    columns: &DataColumns,
    layout: &TemplateLayout,
) {
    put_text(sheet, columns.personal_number, row, &entry.personal_number);
    put_serial(
        sheet,
        columns.date,
        row,
        date_to_serial(entry.date),
        &layout.date_format,
    );
    for (col, value) in &columns.fixed {
        put_text(sheet, *col, row, value);
    }
    put_serial(
        sheet,
        columns.start_time,
        row,
        time_to_serial(entry.start_time),
        &layout.time_format,
    );
    put_serial(
        sheet,
        columns.end_time,
        row,
        time_to_serial(entry.end_time),
        &layout.time_format,
    );
    if !entry.description.is_empty() {
        put_text(sheet, columns.description, row, &entry.description);
    }
}

fn put_text(sheet: &mut Worksheet, col: u16, row: u32, value: &str) {
    sheet
        .get_cell_mut((u32::from(col) + 1, row))
        .set_value_string(value);
}

// keeps the template's borders and fonts, only the number format is set
fn put_serial(sheet: &mut Worksheet, col: u16, row: u32, serial: f64, format: &str) {
    let cell = sheet.get_cell_mut((u32::from(col) + 1, row));
    cell.set_value_number(serial);
    cell.get_style_mut()
        .get_number_format_mut()
        .set_format_code(format);
}
