use serde::Serialize;

/// One ISO-week group of the weekly summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekGroup {
    pub week: u32,
    pub total_hours: f64,
    pub total_earnings: f64,
}

/// One month group of the monthly summary. Keyed by month name alone:
/// the same name occurring in two different years merges into one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGroup {
    pub month: String,
    pub total_hours: f64,
    pub total_earnings: f64,
}

pub type WeeklySummary = Vec<WeekGroup>;
pub type MonthlySummary = Vec<MonthGroup>;

/// Dashboard metrics derived from the current table; never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metrics {
    pub total_hours: f64,
    pub total_earnings: f64,
    pub avg_hourly_rate: f64,
    pub days_worked: usize,
}
