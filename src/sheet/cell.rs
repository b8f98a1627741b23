//! Interpreting calamine cells as the text, dates and times the worklogs carry.

use crate::sheet::excel_date::{serial_to_datetime, serial_to_time};
use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: [&str; 7] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y", "%Y/%m/%d"];

const TIME_FORMATS: [&str; 3] = ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

pub fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Cell content as trimmed text; integral numbers lose their `.0`
/// so identifiers typed as numbers compare equal to their text form.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{}", n)
            }
        }
        Data::Int(n) => n.to_string(),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::DateTime(dt) => serial_text(dt.as_f64()),
        Data::Error(e) => format!("#{:?}", e),
    }
}

/// Date-typed cells as ISO text: date, time or both depending on the serial.
fn serial_text(serial: f64) -> String {
    match serial_to_datetime(serial) {
        Some(dt) if serial < 1.0 => dt.format("%H:%M:%S").to_string(),
        Some(dt) if dt.time() == NaiveTime::MIN => dt.format("%Y-%m-%d").to_string(),
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => serial.to_string(),
    }
}

/// Serials below 1.0 carry only a time of day and are not dates.
pub fn cell_date(cell: &Data) -> Option<NaiveDate> {
    let from_serial = |serial: f64| {
        if serial < 1.0 {
            None
        } else {
            serial_to_datetime(serial).map(|d| d.date())
        }
    };
    match cell {
        Data::DateTime(dt) => from_serial(dt.as_f64()),
        Data::Float(n) => from_serial(*n),
        Data::Int(n) => from_serial(*n as f64),
        Data::String(s) | Data::DateTimeIso(s) => parse_date_text(s),
        _ => None,
    }
}

pub fn cell_time(cell: &Data) -> Option<NaiveTime> {
    match cell {
        Data::DateTime(dt) => serial_to_time(dt.as_f64()),
        Data::Float(n) => serial_to_time(*n),
        Data::Int(0) => NaiveTime::from_hms_opt(0, 0, 0),
        Data::String(s) | Data::DateTimeIso(s) => parse_time_text(s),
        _ => None,
    }
}

fn parse_datetime_text(s: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

pub fn parse_date_text(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| parse_datetime_text(s).map(|dt| dt.date()))
}

pub fn parse_time_text(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
        .or_else(|| parse_datetime_text(s).map(|dt| dt.time()))
}
