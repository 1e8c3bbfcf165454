// src/core/merge.rs

use crate::errors::{AppError, AppResult};
use crate::models::row::TimesheetRow;
use crate::models::timesheet::Timesheet;
use chrono::NaiveDate;
use log::{debug, warn};
use std::fmt;

/// One edited grid row as supplied by the presentation layer. The grid
/// sends its full current tuple set on every interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct RowEdit {
    pub date: NaiveDate,
    pub hours_worked: f64,
    pub hourly_rate: f64,
    pub tasks_note: String,
}

/// A single rejected cell: the prior valid value was retained.
#[derive(Debug)]
pub struct CellRejection {
    pub date: NaiveDate,
    pub field: &'static str,
    pub reason: String,
}

impl fmt::Display for CellRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.date, self.field, self.reason)
    }
}

/// Outcome of one merge pass.
#[derive(Debug, Default)]
pub struct MergeReport {
    pub applied: usize,
    pub rejected: Vec<CellRejection>,
}

/// Merge the grid's full tuple set back into the timesheet by date.
///
/// - An edit matching an existing row updates it in place.
/// - An unknown date (out-of-range included) appends a fresh row with
///   derived fields computed from its date.
/// - Rows whose date is absent from the edit set are removed, since the
///   grid allows a dynamic row count.
/// - Duplicate dates within the edit set: last write wins.
/// - An out-of-bound or non-finite cell is rejected and the prior valid
///   value kept; the rest of the pass is unaffected.
///
/// Daily totals are recomputed for every surviving row.
pub fn apply_edits(sheet: &mut Timesheet, edits: &[RowEdit]) -> MergeReport {
    let mut report = MergeReport::default();
    let mut merged: Vec<TimesheetRow> = Vec::with_capacity(edits.len());

    for edit in edits {
        // Last write wins on a date already seen in this pass.
        if let Some(prev) = merged.iter_mut().find(|r| r.date == edit.date) {
            apply_cells(prev, edit, &mut report.rejected);
        } else {
            let mut row = match sheet.find(edit.date) {
                Some(existing) => existing.clone(),
                None => TimesheetRow::new(edit.date, &sheet.employee_name),
            };
            apply_cells(&mut row, edit, &mut report.rejected);
            merged.push(row);
        }

        report.applied += 1;
    }

    for row in &mut merged {
        row.recompute_total();
    }

    sheet.rows = merged;

    for rej in &report.rejected {
        warn!("rejected cell edit: {rej}");
    }
    debug!(
        "merged {} edits into timesheet ({} rows, {} rejections)",
        report.applied,
        sheet.len(),
        report.rejected.len()
    );

    report
}

fn apply_cells(row: &mut TimesheetRow, edit: &RowEdit, rejected: &mut Vec<CellRejection>) {
    match validate_hours(edit.hours_worked) {
        Ok(()) => row.hours_worked = edit.hours_worked,
        Err(e) => rejected.push(CellRejection {
            date: edit.date,
            field: "hours_worked",
            reason: e.to_string(),
        }),
    }

    match validate_rate(edit.hourly_rate) {
        Ok(()) => row.hourly_rate = edit.hourly_rate,
        Err(e) => rejected.push(CellRejection {
            date: edit.date,
            field: "hourly_rate",
            reason: e.to_string(),
        }),
    }

    // Free text, always accepted.
    row.tasks_note = edit.tasks_note.clone();
}

fn validate_hours(v: f64) -> AppResult<()> {
    if !v.is_finite() {
        return Err(AppError::Validation(format!("hours value is not a number ({v})")));
    }
    if !(0.0..=24.0).contains(&v) {
        return Err(AppError::Validation(format!("hours {v} outside the 0-24 range")));
    }
    Ok(())
}

fn validate_rate(v: f64) -> AppResult<()> {
    if !v.is_finite() {
        return Err(AppError::Validation(format!("rate value is not a number ({v})")));
    }
    if v < 0.0 {
        return Err(AppError::Validation(format!("rate {v} is negative")));
    }
    Ok(())
}
