pub mod row;
pub mod summary;
pub mod timesheet;
