use crate::utils::date::{iso_week, month_name, weekday_name};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of the timesheet.
/// `weekday_name`, `iso_week` and `month_name` are derived from `date` at
/// creation and never recomputed; `date` itself is immutable post-creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetRow {
    pub date: NaiveDate,
    pub weekday_name: String,
    pub hours_worked: f64, // bounded [0, 24]
    pub hourly_rate: f64,  // >= 0, unbounded above
    pub daily_total: f64,  // always hours_worked * hourly_rate
    pub tasks_note: String,
    pub iso_week: u32,
    pub month_name: String,
    pub employee_name: String,
}

impl TimesheetRow {
    /// Fresh row for one day: hours, rate and total start at zero,
    /// the task note empty.
    pub fn new(date: NaiveDate, employee_name: &str) -> Self {
        Self {
            date,
            weekday_name: weekday_name(date),
            hours_worked: 0.0,
            hourly_rate: 0.0,
            daily_total: 0.0,
            tasks_note: String::new(),
            iso_week: iso_week(date),
            month_name: month_name(date),
            employee_name: employee_name.to_string(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn recompute_total(&mut self) {
        self.daily_total = self.hours_worked * self.hourly_rate;
    }
}
