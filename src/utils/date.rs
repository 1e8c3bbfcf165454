use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// All days from `start` to `end` inclusive, ascending.
/// An inverted range yields no days.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = start;

    while d <= end {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}

/// Full English weekday name, e.g. "Wednesday".
pub fn weekday_name(d: NaiveDate) -> String {
    d.format("%A").to_string()
}

/// Full English month name, e.g. "January".
pub fn month_name(d: NaiveDate) -> String {
    d.format("%B").to_string()
}

/// ISO-8601 week number (weeks start Monday, week 1 contains the
/// first Thursday of the year).
pub fn iso_week(d: NaiveDate) -> u32 {
    d.iso_week().week()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}
