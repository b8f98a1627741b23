use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// A calendar month as used for month folder names (`YYYY-MM`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|_| Self { year, month })
            .ok_or_else(|| AppError::InvalidMonth(format!("{year:04}-{month:02}")))
    }

    pub fn current() -> Self {
        let d = today();
        Self {
            year: d.year(),
            month: d.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl FromStr for YearMonth {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // `%Y` would also accept "25-1", so insist on the folder shape first
        let shaped = s.len() == 7 && s.as_bytes()[4] == b'-';
        match NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
            Ok(d) if shaped => Ok(Self {
                year: d.year(),
                month: d.month(),
            }),
            _ => Err(AppError::InvalidMonth(s.to_string())),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
