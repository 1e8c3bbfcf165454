use crate::models::row::TimesheetRow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ordered sequence of rows, one per day of the active range at creation
/// time. Rows stay chronological because edits never change `date`; grid
/// insertions may append out-of-range dates afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timesheet {
    pub employee_name: String,
    pub rows: Vec<TimesheetRow>,
}

impl Timesheet {
    pub fn rows(&self) -> &[TimesheetRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn find(&self, date: NaiveDate) -> Option<&TimesheetRow> {
        self.rows.iter().find(|r| r.date == date)
    }

    pub fn find_mut(&mut self, date: NaiveDate) -> Option<&mut TimesheetRow> {
        self.rows.iter_mut().find(|r| r.date == date)
    }
}
