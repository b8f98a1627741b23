//! Conversions between chrono values and Excel serial numbers (1900 date system).

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

const SECONDS_PER_DAY: i64 = 86_400;

fn excel_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Interpret an Excel serial as date and time, rounded to the second.
pub fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let total = (serial * SECONDS_PER_DAY as f64).round() as i64;
    excel_epoch().checked_add_signed(Duration::seconds(total))
}

/// Time of day carried by a serial; whole days are ignored.
pub fn serial_to_time(serial: f64) -> Option<NaiveTime> {
    serial_to_datetime(serial).map(|dt| dt.time())
}

pub fn date_to_serial(date: NaiveDate) -> f64 {
    (date - excel_epoch().date()).num_days() as f64
}

pub fn time_to_serial(time: NaiveTime) -> f64 {
    time.num_seconds_from_midnight() as f64 / SECONDS_PER_DAY as f64
}
