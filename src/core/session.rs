// src/core/session.rs

use crate::core::builder::TimesheetBuilder;
use crate::core::calculator::TotalsCalculator;
use crate::core::merge::{self, MergeReport, RowEdit};
use crate::errors::AppResult;
use crate::export::{self, ExportFormat};
use crate::models::summary::{Metrics, MonthlySummary, WeeklySummary};
use crate::models::timesheet::Timesheet;
use crate::utils::date::today;
use chrono::NaiveDate;

/// Per-session state: the active range, employee name and timesheet.
/// Owned by the presentation layer's request-handling context; there is
/// no shared global slot.
#[derive(Debug, Clone)]
pub struct Session {
    employee_name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    timesheet: Timesheet,
}

impl Session {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, employee_name: &str) -> Self {
        Self {
            employee_name: employee_name.to_string(),
            start_date,
            end_date,
            timesheet: TimesheetBuilder::build(start_date, end_date, employee_name),
        }
    }

    /// Re-run the builder against the stored range and name, discarding
    /// all edits. Idempotent: resetting twice equals resetting once.
    pub fn reset(&mut self) {
        self.timesheet =
            TimesheetBuilder::build(self.start_date, self.end_date, &self.employee_name);
    }

    /// Merge the grid's full tuple set and recompute daily totals.
    pub fn apply_edits(&mut self, edits: &[RowEdit]) -> MergeReport {
        merge::apply_edits(&mut self.timesheet, edits)
    }

    pub fn timesheet(&self) -> &Timesheet {
        &self.timesheet
    }

    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn metrics(&self) -> Metrics {
        TotalsCalculator::metrics(&self.timesheet)
    }

    pub fn weekly_summary(&self) -> WeeklySummary {
        TotalsCalculator::summarize_by_week(&self.timesheet)
    }

    pub fn monthly_summary(&self) -> MonthlySummary {
        TotalsCalculator::summarize_by_month(&self.timesheet)
    }

    /// Three-sheet XLSX workbook of the current table and both summaries.
    pub fn export_workbook(&self) -> AppResult<Vec<u8>> {
        export::xlsx::export_workbook(
            &self.timesheet,
            &self.weekly_summary(),
            &self.monthly_summary(),
        )
    }

    /// CSV of the daily table only, header included.
    pub fn export_csv(&self) -> AppResult<String> {
        export::csv::export_csv(&self.timesheet)
    }

    /// `timesheet_<employee>_<YYYYMMDD>.<ext>`, dated today, for the host
    /// to offer as a download name.
    pub fn suggested_filename(&self, format: ExportFormat) -> String {
        export::suggested_filename(&self.employee_name, today(), format)
    }
}
