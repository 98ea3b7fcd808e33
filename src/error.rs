//! Error types for addrbook-csv
//!
//! Provides a unified error type for all reader, writer and facade operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::mode::Mode;

/// Result type alias using CsvError
pub type Result<T> = std::result::Result<T, CsvError>;

/// Unified error type for addrbook-csv operations
#[derive(Debug, Error)]
pub enum CsvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: unexpected mode {mode}, cannot open file at '{}'", .path.display())]
    InvalidMode { mode: i32, path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Stream Lifecycle Errors
    // -------------------------------------------------------------------------
    #[error("Attempt made to use the {0} stream before it was opened")]
    UninitializedStream(Mode),

    #[error("Attempt made to use the {0} stream after it was disposed")]
    StreamClosed(Mode),

    // -------------------------------------------------------------------------
    // Legacy Read Errors
    // -------------------------------------------------------------------------
    /// The deprecated read path ran past the last line. Kept as a hard
    /// failure; callers compiled against the old contract rely on it.
    #[error("Legacy read attempted after the last line was consumed")]
    LegacyReadExhausted,

    /// The deprecated read path hit a line without a second field.
    #[error("Legacy read found fewer than two fields on line {line_number}")]
    LegacyMissingField { line_number: u64 },
}
