use chrono::NaiveDate;
use timecard::{RowEdit, Session, TimesheetBuilder, TotalsCalculator};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn edit(date: NaiveDate, hours: f64, rate: f64) -> RowEdit {
    RowEdit {
        date,
        hours_worked: hours,
        hourly_rate: rate,
        tasks_note: String::new(),
    }
}

#[test]
fn test_recompute_daily_totals() {
    let mut sheet = TimesheetBuilder::build(d(2025, 1, 1), d(2025, 1, 2), "Alex");
    sheet.rows[0].hours_worked = 7.5;
    sheet.rows[0].hourly_rate = 30.0;
    sheet.rows[1].hours_worked = 4.0;
    sheet.rows[1].hourly_rate = 12.25;

    TotalsCalculator::recompute_daily_totals(&mut sheet);

    assert_eq!(sheet.rows[0].daily_total, 7.5 * 30.0);
    assert_eq!(sheet.rows[1].daily_total, 4.0 * 12.25);
}

#[test]
fn test_concrete_january_scenario() {
    let mut session = Session::new(d(2025, 1, 1), d(2025, 1, 3), "Alex");
    session.apply_edits(&[
        edit(d(2025, 1, 1), 8.0, 20.0),
        edit(d(2025, 1, 2), 6.0, 25.0),
        edit(d(2025, 1, 3), 0.0, 0.0),
    ]);

    let m = session.metrics();
    assert_eq!(m.total_hours, 14.0);
    assert_eq!(m.total_earnings, 310.0);
    assert_eq!(m.avg_hourly_rate, 22.5);
    assert_eq!(m.days_worked, 2);

    let weekly = session.weekly_summary();
    assert_eq!(weekly.len(), 1);
    assert_eq!(weekly[0].week, 1);
    assert_eq!(weekly[0].total_hours, 14.0);
    assert_eq!(weekly[0].total_earnings, 310.0);
}

#[test]
fn test_weekly_summary_orders_by_week_number() {
    let mut session = Session::new(d(2025, 1, 6), d(2025, 1, 19), "Alex");
    session.apply_edits(&[
        edit(d(2025, 1, 6), 8.0, 10.0),  // ISO week 2
        edit(d(2025, 1, 13), 6.0, 10.0), // ISO week 3
        edit(d(2025, 1, 14), 2.0, 10.0), // ISO week 3
    ]);

    let weekly = session.weekly_summary();
    assert_eq!(weekly.len(), 2);
    assert_eq!(weekly[0].week, 2);
    assert_eq!(weekly[1].week, 3);
    assert_eq!(weekly[0].total_hours, 8.0);
    assert_eq!(weekly[1].total_hours, 8.0);
    assert_eq!(weekly[1].total_earnings, 80.0);
}

#[test]
fn test_monthly_summary_orders_by_first_occurrence() {
    let mut session = Session::new(d(2025, 12, 29), d(2026, 1, 3), "Alex");
    session.apply_edits(&[
        edit(d(2025, 12, 30), 5.0, 40.0),
        edit(d(2026, 1, 2), 3.0, 40.0),
    ]);

    let monthly = session.monthly_summary();
    assert_eq!(monthly.len(), 2);
    // First occurrence order across the year boundary, not alphabetical.
    assert_eq!(monthly[0].month, "December");
    assert_eq!(monthly[1].month, "January");
    assert_eq!(monthly[0].total_earnings, 200.0);
    assert_eq!(monthly[1].total_earnings, 120.0);
}

#[test]
fn test_summary_conservation_law() {
    let mut session = Session::new(d(2025, 3, 20), d(2025, 4, 10), "Alex");
    let edits: Vec<RowEdit> = session
        .timesheet()
        .rows()
        .iter()
        .enumerate()
        .map(|(i, r)| edit(r.date, (i % 9) as f64, 15.5))
        .collect();
    session.apply_edits(&edits);

    let m = session.metrics();

    let weekly_hours: f64 = session.weekly_summary().iter().map(|g| g.total_hours).sum();
    let weekly_earnings: f64 = session.weekly_summary().iter().map(|g| g.total_earnings).sum();
    let monthly_hours: f64 = session.monthly_summary().iter().map(|g| g.total_hours).sum();
    let monthly_earnings: f64 = session
        .monthly_summary()
        .iter()
        .map(|g| g.total_earnings)
        .sum();

    assert!((weekly_hours - m.total_hours).abs() < 1e-6);
    assert!((weekly_earnings - m.total_earnings).abs() < 1e-6);
    assert!((monthly_hours - m.total_hours).abs() < 1e-6);
    assert!((monthly_earnings - m.total_earnings).abs() < 1e-6);
}

#[test]
fn test_summary_rounds_to_two_decimals() {
    let mut session = Session::new(d(2025, 1, 6), d(2025, 1, 7), "Alex");
    session.apply_edits(&[
        edit(d(2025, 1, 6), 1.1, 10.01),
        edit(d(2025, 1, 7), 2.2, 10.01),
    ]);

    let weekly = session.weekly_summary();
    assert_eq!(weekly[0].total_hours, 3.3);
    assert_eq!(weekly[0].total_earnings, 33.03);
}

#[test]
fn test_avg_rate_zero_when_no_positive_rates() {
    let session = Session::new(d(2025, 1, 1), d(2025, 1, 5), "Alex");
    let m = session.metrics();
    assert_eq!(m.avg_hourly_rate, 0.0);
    assert_eq!(m.days_worked, 0);
}

#[test]
fn test_empty_range_metrics_and_summaries() {
    let session = Session::new(d(2025, 1, 2), d(2025, 1, 1), "Alex");

    assert!(session.timesheet().is_empty());
    assert!(session.weekly_summary().is_empty());
    assert!(session.monthly_summary().is_empty());

    let m = session.metrics();
    assert_eq!(m.total_hours, 0.0);
    assert_eq!(m.total_earnings, 0.0);
    assert_eq!(m.avg_hourly_rate, 0.0);
    assert_eq!(m.days_worked, 0);
}
