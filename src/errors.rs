//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Corrupted collection snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidRange { start: String, end: String },

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid attachment payload: {0}")]
    InvalidAttachment(#[from] base64::DecodeError),

    // ---------------------------
    // Record lookup
    // ---------------------------
    #[error("No {collection} record matches id '{id}'")]
    NotFound { collection: String, id: String },

    #[error("Id prefix '{id}' is ambiguous in {collection} ({matches} matches)")]
    AmbiguousId {
        collection: String,
        id: String,
        matches: usize,
    },

    // ---------------------------
    // Documents
    // ---------------------------
    #[error("Attachment too large: {size} bytes (max {max} bytes)")]
    AttachmentTooLarge { size: u64, max: u64 },

    #[error("Document {0} has no attachment")]
    NoAttachment(String),

    // ---------------------------
    // Session
    // ---------------------------
    #[error("Not logged in: run `marinerlog login` or `marinerlog register` first")]
    NotAuthenticated,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
