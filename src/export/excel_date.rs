// src/export/excel_date.rs

use chrono::NaiveDate;

/// Number format applied to date cells.
pub(crate) const DATE_NUM_FORMAT: &str = "yyyy-mm-dd";

/// Excel serial for a calendar date (days since the 1899-12-30 epoch,
/// matching Excel's leap-year-bug-compatible day numbering).
pub(crate) fn date_to_excel_serial(d: NaiveDate) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    (d - excel_epoch).num_days() as f64
}
