// src/export/csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{TimesheetExportRow, daily_headers};
use crate::models::timesheet::Timesheet;
use log::{debug, info};

/// CSV of the full daily table, header row included, no summaries.
/// Pure read: serializes in memory and hands the text back to the caller.
pub fn export_csv(sheet: &Timesheet) -> AppResult<String> {
    debug!("exporting {} rows to CSV", sheet.len());

    let mut wtr = csv::Writer::from_writer(Vec::new());

    if sheet.is_empty() {
        // serde never runs on an empty table, so emit the header by hand.
        wtr.write_record(daily_headers())
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    for row in sheet.rows() {
        wtr.serialize(TimesheetExportRow::from(row))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    let out = String::from_utf8(bytes)
        .map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))?;

    info!("CSV export completed: {} bytes", out.len());
    Ok(out)
}
