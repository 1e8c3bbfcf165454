// src/export/mod.rs

pub mod csv;
mod excel_date;
mod model;
pub mod xlsx;

pub use model::TimesheetExportRow;

use chrono::NaiveDate;

pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const CSV_MIME: &str = "text/csv";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => CSV_MIME,
            ExportFormat::Xlsx => XLSX_MIME,
        }
    }
}

/// Download name the host should offer:
/// `timesheet_<employee with spaces as underscores>_<YYYYMMDD>.<ext>`.
pub fn suggested_filename(employee_name: &str, export_date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "timesheet_{}_{}.{}",
        employee_name.trim().replace(' ', "_"),
        export_date.format("%Y%m%d"),
        format.as_str()
    )
}
