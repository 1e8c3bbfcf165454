// src/export/model.rs

use crate::models::row::TimesheetRow;
use serde::{Deserialize, Serialize};

/// Flat export shape of one timesheet row, with the display column names
/// as serde renames so CSV headers come out right.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TimesheetExportRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Day")]
    pub day: String,
    #[serde(rename = "Hours Worked")]
    pub hours_worked: f64,
    #[serde(rename = "Hourly Rate")]
    pub hourly_rate: f64,
    #[serde(rename = "Daily Total")]
    pub daily_total: f64,
    #[serde(rename = "Tasks Completed")]
    pub tasks_note: String,
    #[serde(rename = "Week")]
    pub week: u32,
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Employee Name")]
    pub employee_name: String,
}

impl From<&TimesheetRow> for TimesheetExportRow {
    fn from(r: &TimesheetRow) -> Self {
        Self {
            date: r.date_str(),
            day: r.weekday_name.clone(),
            hours_worked: r.hours_worked,
            hourly_rate: r.hourly_rate,
            daily_total: r.daily_total,
            tasks_note: r.tasks_note.clone(),
            week: r.iso_week,
            month: r.month_name.clone(),
            employee_name: r.employee_name.clone(),
        }
    }
}

/// Column headers, in display order, for CSV and XLSX.
pub(crate) fn daily_headers() -> Vec<&'static str> {
    vec![
        "Date",
        "Day",
        "Hours Worked",
        "Hourly Rate",
        "Daily Total",
        "Tasks Completed",
        "Week",
        "Month",
        "Employee Name",
    ]
}
