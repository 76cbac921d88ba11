//! Unified application error type.
//! All modules (db, core, cli, export, utils) return AppError so error
//! handling stays consistent from the store up to `main`.

use std::io;
use thiserror::Error;

use crate::core::status::DayStatus;
use crate::core::action::Action;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Malformed stored record: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid time slice type: {0}")]
    InvalidSliceType(u8),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No work day stored for {0}")]
    NoWorkDay(String),

    #[error("'{action}' is not available while {status}")]
    ActionNotAvailable { action: Action, status: DayStatus },

    #[error("Invalid chart window: {0}")]
    InvalidWindow(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV separator must be a single ASCII character, got {0:?}")]
    InvalidSeparator(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("{0}")]
    Cancelled(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(e: zip::result::ZipError) -> Self {
        AppError::Io(io::Error::other(e))
    }
}

pub type AppResult<T> = Result<T, AppError>;
