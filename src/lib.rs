//! # addrbook-csv
//!
//! Record-at-a-time reading and writing of tab-separated address-book files:
//! - One record per line, fields joined by a single separator character
//! - Reader yields the first two fields of each line, tolerating short lines
//! - Writer truncates on open and accepts any number of fields
//! - A compatibility facade that keeps the historical combined API,
//!   including its defective legacy read
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 CsvReaderWriter (compat)                     │
//! │             open(path, Mode) / read / write / close          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │  Mode::Read             │  Mode::Write
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  CsvReader  │          │  CsvWriter  │
//!   │ (BufReader) │          │ (BufWriter) │
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │
//!          └───────────┬────────────┘
//!                      ▼
//!              ┌───────────────┐
//!              │DiagnosticSink │
//!              └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod mode;
pub mod diagnostics;

pub mod csv;
pub mod compat;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CsvError, Result};
pub use config::{Config, LineEnding};
pub use mode::Mode;
pub use diagnostics::{Diagnostic, DiagnosticSink, RecordingSink, SharedSink, TracingSink};
pub use csv::{CsvReader, CsvWriter};
pub use compat::CsvReaderWriter;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of addrbook-csv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
