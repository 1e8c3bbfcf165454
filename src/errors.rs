//! Unified application error type.
//! All modules (core, export, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Cell validation
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
