// src/core/builder.rs

use crate::models::row::TimesheetRow;
use crate::models::timesheet::Timesheet;
use crate::utils::date::days_in_range;
use chrono::NaiveDate;
use log::debug;

/// Constructs the initial per-day row set for a date range.
pub struct TimesheetBuilder;

impl TimesheetBuilder {
    /// One row per calendar day in `[start, end]` inclusive, chronological.
    /// Hours, rate and total start at zero, the task note empty.
    /// An inverted range (`start > end`) produces an empty timesheet
    /// rather than an error.
    pub fn build(start: NaiveDate, end: NaiveDate, employee_name: &str) -> Timesheet {
        let rows: Vec<TimesheetRow> = days_in_range(start, end)
            .into_iter()
            .map(|d| TimesheetRow::new(d, employee_name))
            .collect();

        debug!(
            "built timesheet for '{}': {} rows ({} .. {})",
            employee_name,
            rows.len(),
            start,
            end
        );

        Timesheet {
            employee_name: employee_name.to_string(),
            rows,
        }
    }
}
