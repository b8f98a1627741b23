#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use calamine::{Data, Range, Reader, open_workbook_auto};
use chrono::{NaiveDate, NaiveTime};
use eco2ve_timesheet::sheet::excel_date::{date_to_serial, time_to_serial};
use rust_xlsxwriter::{Format, Workbook};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MONTH: &str = "2025-10";

pub fn e2t() -> Command {
    cargo_bin_cmd!("eco2ve-timesheet")
}

/// A cell to put into a fixture workbook.
#[derive(Debug, Clone)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Time(NaiveTime),
    Formula(String),
}

pub fn t(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid test time")
}

/// Write a workbook with the given sheets; rows start at A1.
pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<Cell>>)]) {
    let mut workbook = Workbook::new();
    let date_fmt = Format::new().set_num_format("yyyy-mm-dd");
    let time_fmt = Format::new().set_num_format("hh:mm");

    for (name, rows) in sheets {
        let ws = workbook.add_worksheet();
        ws.set_name(*name).expect("sheet name");
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match cell {
                    Cell::Empty => {}
                    Cell::Text(s) => {
                        ws.write_string(r, c, s).expect("write text");
                    }
                    Cell::Number(n) => {
                        ws.write_number(r, c, *n).expect("write number");
                    }
                    Cell::Date(d) => {
                        ws.write_number_with_format(r, c, date_to_serial(*d), &date_fmt)
                            .expect("write date");
                    }
                    Cell::Time(tm) => {
                        ws.write_number_with_format(r, c, time_to_serial(*tm), &time_fmt)
                            .expect("write time");
                    }
                    Cell::Formula(f) => {
                        ws.write_formula(r, c, f.as_str()).expect("write formula");
                    }
                }
            }
        }
    }

    workbook.save(path).expect("save fixture workbook");
}

pub fn worklog_header() -> Vec<Cell> {
    ["Resource No.", "Date", "Start Time", "End Time", "Text/Description", "Hour Type"]
        .iter()
        .map(|h| t(h))
        .collect()
}

/// A billable worklog line with real Excel date/time cells.
pub fn worklog_row(resource: &str, day: &str, start: &str, end: &str, text: &str) -> Vec<Cell> {
    vec![
        t(resource),
        Cell::Date(date(day)),
        Cell::Time(time(start)),
        Cell::Time(time(end)),
        t(text),
        t("Billable"),
    ]
}

/// Base folder with roster, template and an empty month folder.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Roster, default template and month folder.
    pub fn new(roster: &[(&str, &str)]) -> Self {
        let fx = Self::empty();
        fx.write_roster(roster);
        fx.write_template(default_template());
        std::fs::create_dir_all(fx.month_dir()).expect("create month folder");
        fx
    }

    pub fn base(&self) -> &Path {
        self.dir.path()
    }

    pub fn base_str(&self) -> String {
        self.base().to_string_lossy().to_string()
    }

    pub fn month_dir(&self) -> PathBuf {
        self.base().join(MONTH)
    }

    pub fn output_path(&self) -> PathBuf {
        self.month_dir().join(format!("{MONTH}-eco2veTimeSheet.xlsx"))
    }

    pub fn write_roster(&self, roster: &[(&str, &str)]) {
        let mut rows = vec![vec![t("Resource No."), t("Name"), t("Personal Number")]];
        for (res, pers) in roster {
            rows.push(vec![t(res), t("Jane Doe"), t(pers)]);
        }
        write_workbook(&self.base().join("Employees.xlsx"), &[("Sheet1", rows)]);
    }

    pub fn write_template(&self, sheets: Vec<(&str, Vec<Vec<Cell>>)>) {
        write_workbook(&self.base().join("eco2ve_TimeSheet.xlsx"), &sheets);
    }

    pub fn add_worklog(&self, name: &str, rows: Vec<Vec<Cell>>) {
        write_workbook(&self.month_dir().join(name), &[("Worklogs", rows)]);
    }
}

/// Two header lines and a formula, data region from row 3.
pub fn default_template() -> Vec<(&'static str, Vec<Vec<Cell>>)> {
    vec![
        (
            "TimeSheet",
            vec![
                vec![
                    t("eco2ve TimeSheet"),
                    Cell::Empty,
                    Cell::Empty,
                    Cell::Formula("=SUM(1,2)".to_string()),
                ],
                vec![
                    t("Pers.Nr."),
                    t("Date"),
                    Cell::Empty,
                    t("Project"),
                    t("Activity"),
                ],
            ],
        ),
        ("Codes", vec![vec![t("AN03"), t("Analysis")]]),
    ]
}

pub fn read_range(path: &Path, sheet: &str) -> Range<Data> {
    let mut workbook = open_workbook_auto(path).expect("open output workbook");
    workbook.worksheet_range(sheet).expect("read output sheet")
}

/// Cell at 1-based `row` and zero-based `col`.
pub fn cell_at(range: &Range<Data>, row: u32, col: u32) -> Data {
    range
        .get_value((row - 1, col))
        .cloned()
        .unwrap_or(Data::Empty)
}

pub fn text_at(range: &Range<Data>, row: u32, col: u32) -> String {
    eco2ve_timesheet::sheet::cell::cell_text(&cell_at(range, row, col))
}

/// Raw XML of one part of an xlsx package.
pub fn package_part(path: &Path, name: &str) -> String {
    let mut archive = zip::ZipArchive::new(File::open(path).expect("open package")).expect("zip");
    let mut part = archive.by_name(name).expect("part present");
    let mut xml = String::new();
    part.read_to_string(&mut xml).expect("read part");
    xml
}

/// All worksheet parts of an xlsx package, concatenated.
pub fn worksheets_xml(path: &Path) -> String {
    let archive = zip::ZipArchive::new(File::open(path).expect("open package")).expect("zip");
    let names: Vec<String> = archive
        .file_names()
        .filter(|n| n.starts_with("xl/worksheets/sheet"))
        .map(str::to_string)
        .collect();
    names.iter().map(|n| package_part(path, n)).collect()
}
