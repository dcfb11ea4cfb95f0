//! Unified application error type.
//! The store, the date helpers, the offline cache and the CLI all return
//! AppError so callers get one consistent failure surface.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store lifecycle
    // ---------------------------
    #[error("Store initialization failed: {0}")]
    Initialization(String),

    #[error("Store is not initialized (call init first)")]
    NotInitialized,

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Store operations
    // ---------------------------
    #[error("Transaction error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Record '{key}' already exists in {collection}")]
    WriteConflict { collection: String, key: String },

    #[error("No record '{key}' in {collection}")]
    NotFound { collection: String, key: String },

    #[error("Collection {collection} has no index named '{index}'")]
    UnknownIndex { collection: String, index: String },

    #[error("Record serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export / backup / cache
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Offline cache error: {0}")]
    Cache(String),

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
        AppError::Other(format!("zip: {e}"))
    }
}

pub type AppResult<T> = Result<T, AppError>;
