// src/core/calculator.rs

use crate::models::summary::{Metrics, MonthGroup, MonthlySummary, WeekGroup, WeeklySummary};
use crate::models::timesheet::Timesheet;

/// Daily-total recomputation, grouped summaries and dashboard metrics.
pub struct TotalsCalculator;

impl TotalsCalculator {
    /// Set `daily_total = hours_worked * hourly_rate` on every row.
    /// Pure and total: cell validation happens at merge time, so the
    /// multiplication here never fails.
    pub fn recompute_daily_totals(sheet: &mut Timesheet) {
        for row in &mut sheet.rows {
            row.recompute_total();
        }
    }

    /// Group rows by ISO week, summing hours and earnings per group.
    /// Sums are rounded to 2 decimal places; groups are ordered by
    /// ascending week number.
    pub fn summarize_by_week(sheet: &Timesheet) -> WeeklySummary {
        let mut groups: Vec<WeekGroup> = Vec::new();

        for row in sheet.rows() {
            match groups.iter_mut().find(|g| g.week == row.iso_week) {
                Some(g) => {
                    g.total_hours += row.hours_worked;
                    g.total_earnings += row.daily_total;
                }
                None => groups.push(WeekGroup {
                    week: row.iso_week,
                    total_hours: row.hours_worked,
                    total_earnings: row.daily_total,
                }),
            }
        }

        groups.sort_by_key(|g| g.week);

        for g in &mut groups {
            g.total_hours = round2(g.total_hours);
            g.total_earnings = round2(g.total_earnings);
        }

        groups
    }

    /// Group rows by month name, summing and rounding as for weeks.
    /// Groups are ordered by first occurrence within the range, not
    /// alphabetically; a month name repeating across years merges into
    /// a single group.
    pub fn summarize_by_month(sheet: &Timesheet) -> MonthlySummary {
        let mut groups: Vec<MonthGroup> = Vec::new();

        for row in sheet.rows() {
            match groups.iter_mut().find(|g| g.month == row.month_name) {
                Some(g) => {
                    g.total_hours += row.hours_worked;
                    g.total_earnings += row.daily_total;
                }
                None => groups.push(MonthGroup {
                    month: row.month_name.clone(),
                    total_hours: row.hours_worked,
                    total_earnings: row.daily_total,
                }),
            }
        }

        for g in &mut groups {
            g.total_hours = round2(g.total_hours);
            g.total_earnings = round2(g.total_earnings);
        }

        groups
    }

    /// The four dashboard metrics over the whole table.
    /// `avg_hourly_rate` averages only rows with a positive rate and is
    /// 0 when there are none.
    pub fn metrics(sheet: &Timesheet) -> Metrics {
        let total_hours: f64 = sheet.rows().iter().map(|r| r.hours_worked).sum();
        let total_earnings: f64 = sheet.rows().iter().map(|r| r.daily_total).sum();

        let rated: Vec<f64> = sheet
            .rows()
            .iter()
            .filter(|r| r.hourly_rate > 0.0)
            .map(|r| r.hourly_rate)
            .collect();

        let avg_hourly_rate = if rated.is_empty() {
            0.0
        } else {
            rated.iter().sum::<f64>() / rated.len() as f64
        };

        let days_worked = sheet.rows().iter().filter(|r| r.hours_worked > 0.0).count();

        Metrics {
            total_hours,
            total_earnings,
            avg_hourly_rate,
            days_worked,
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
