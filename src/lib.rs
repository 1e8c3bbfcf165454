//! timecard library root.
//! Timesheet construction, totals/summary calculation, grid-edit merging,
//! and XLSX/CSV export for a single interactive session.

pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod utils;

pub use crate::core::builder::TimesheetBuilder;
pub use crate::core::calculator::TotalsCalculator;
pub use crate::core::merge::{CellRejection, MergeReport, RowEdit};
pub use crate::core::session::Session;
pub use crate::errors::{AppError, AppResult};
pub use crate::export::ExportFormat;
pub use crate::models::row::TimesheetRow;
pub use crate::models::summary::{Metrics, MonthGroup, MonthlySummary, WeekGroup, WeeklySummary};
pub use crate::models::timesheet::Timesheet;
