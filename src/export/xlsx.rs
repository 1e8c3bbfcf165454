// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{DATE_NUM_FORMAT, date_to_excel_serial};
use crate::export::model::daily_headers;
use crate::models::summary::{MonthlySummary, WeeklySummary};
use crate::models::timesheet::Timesheet;
use log::{debug, info};
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use unicode_width::UnicodeWidthStr;

const BAND_1: Color = Color::RGB(0xEAF3FB);
const BAND_2: Color = Color::RGB(0xFFFFFF);

const SUMMARY_HEADERS: [&str; 2] = ["Total Hours", "Total Earnings ($)"];

/// In-memory XLSX workbook with three sheets, in order: the full daily
/// table, the weekly summary and the monthly summary. Styling: bold
/// white-on-blue header, thin borders, alternating row banding, dates as
/// Excel serials, auto-sized columns, frozen header row.
pub fn export_workbook(
    sheet: &Timesheet,
    weekly: &WeeklySummary,
    monthly: &MonthlySummary,
) -> AppResult<Vec<u8>> {
    debug!(
        "exporting workbook: {} rows, {} week groups, {} month groups",
        sheet.len(),
        weekly.len(),
        monthly.len()
    );

    let mut workbook = Workbook::new();

    write_daily_sheet(workbook.add_worksheet(), sheet)?;
    write_weekly_sheet(workbook.add_worksheet(), weekly)?;
    write_monthly_sheet(workbook.add_worksheet(), monthly)?;

    let buf = workbook.save_to_buffer().map_err(to_export_error)?;

    info!("XLSX export completed: {} bytes", buf.len());
    Ok(buf)
}

fn write_daily_sheet(worksheet: &mut Worksheet, sheet: &Timesheet) -> AppResult<()> {
    worksheet.set_name("Daily Timesheet").map_err(to_export_error)?;

    let headers = daily_headers();
    let mut col_widths = write_header_row(worksheet, &headers)?;

    for (row_index, r) in sheet.rows().iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = band_color(row_index);

        let date_fmt = cell_format(band).set_num_format(DATE_NUM_FORMAT);
        worksheet
            .write_with_format(row, 0, date_to_excel_serial(r.date), &date_fmt)
            .map_err(to_export_error)?;
        col_widths[0] = col_widths[0].max(r.date_str().len());

        write_text(worksheet, row, 1, &r.weekday_name, band, &mut col_widths)?;
        write_number(worksheet, row, 2, r.hours_worked, band, &mut col_widths)?;
        write_number(worksheet, row, 3, r.hourly_rate, band, &mut col_widths)?;
        write_number(worksheet, row, 4, r.daily_total, band, &mut col_widths)?;
        write_text(worksheet, row, 5, &r.tasks_note, band, &mut col_widths)?;
        write_number(worksheet, row, 6, f64::from(r.iso_week), band, &mut col_widths)?;
        write_text(worksheet, row, 7, &r.month_name, band, &mut col_widths)?;
        write_text(worksheet, row, 8, &r.employee_name, band, &mut col_widths)?;
    }

    finish_sheet(worksheet, &col_widths)
}

fn write_weekly_sheet(worksheet: &mut Worksheet, weekly: &WeeklySummary) -> AppResult<()> {
    worksheet.set_name("Weekly Summary").map_err(to_export_error)?;

    let headers: Vec<&str> = std::iter::once("Week")
        .chain(SUMMARY_HEADERS)
        .collect();
    let mut col_widths = write_header_row(worksheet, &headers)?;

    for (row_index, g) in weekly.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = band_color(row_index);

        write_number(worksheet, row, 0, f64::from(g.week), band, &mut col_widths)?;
        write_number(worksheet, row, 1, g.total_hours, band, &mut col_widths)?;
        write_number(worksheet, row, 2, g.total_earnings, band, &mut col_widths)?;
    }

    finish_sheet(worksheet, &col_widths)
}

fn write_monthly_sheet(worksheet: &mut Worksheet, monthly: &MonthlySummary) -> AppResult<()> {
    worksheet.set_name("Monthly Summary").map_err(to_export_error)?;

    let headers: Vec<&str> = std::iter::once("Month")
        .chain(SUMMARY_HEADERS)
        .collect();
    let mut col_widths = write_header_row(worksheet, &headers)?;

    for (row_index, g) in monthly.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = band_color(row_index);

        write_text(worksheet, row, 0, &g.month, band, &mut col_widths)?;
        write_number(worksheet, row, 1, g.total_hours, band, &mut col_widths)?;
        write_number(worksheet, row, 2, g.total_earnings, band, &mut col_widths)?;
    }

    finish_sheet(worksheet, &col_widths)
}

/// Header row with the shared style; returns the initial column widths.
fn write_header_row(worksheet: &mut Worksheet, headers: &[&str]) -> AppResult<Vec<usize>> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    Ok(headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect())
}

fn write_text(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    band: Color,
    col_widths: &mut [usize],
) -> AppResult<()> {
    worksheet
        .write_with_format(row, col, s, &cell_format(band))
        .map_err(to_export_error)?;
    col_widths[col as usize] = col_widths[col as usize].max(UnicodeWidthStr::width(s));
    Ok(())
}

fn write_number(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    v: f64,
    band: Color,
    col_widths: &mut [usize],
) -> AppResult<()> {
    let fmt = cell_format(band).set_align(FormatAlign::Right);
    worksheet
        .write_with_format(row, col, v, &fmt)
        .map_err(to_export_error)?;
    col_widths[col as usize] = col_widths[col as usize].max(format!("{v}").len());
    Ok(())
}

fn cell_format(band: Color) -> Format {
    Format::new()
        .set_background_color(band)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn band_color(row_index: usize) -> Color {
    if row_index % 2 == 0 { BAND_1 } else { BAND_2 }
}

fn finish_sheet(worksheet: &mut Worksheet, col_widths: &[usize]) -> AppResult<()> {
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
