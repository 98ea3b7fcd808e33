//! Delimited Record Module
//!
//! Record-at-a-time reading and writing of separator-delimited text lines.
//!
//! ## Responsibilities
//! - Own exactly one file stream per reader or writer
//! - Split lines into their first two fields on read
//! - Join any number of fields into one line on write
//! - Tolerate repeated `open` calls (diagnostic, not error)
//!
//! ## File Format
//! ```text
//! ┌───────────┬─────┬───────────┬─────┬─────┬──────────┐
//! │ Field 1   │ SEP │ Field 2   │ SEP │ ... │ EOL      │
//! └───────────┴─────┴───────────┴─────┴─────┴──────────┘
//! ```
//! `SEP` is a single character (tab by default). No quoting or escaping.
//!
//! ## Stream Lifecycle
//! ```text
//! Unopened ──open──▶ Open ──dispose──▶ Disposed
//! ```
//! Only the first `open` acquires a stream. Later calls, including after
//! dispose, emit a diagnostic and change nothing.

mod line;
mod reader;
mod writer;

pub use reader::CsvReader;
pub use writer::CsvWriter;

use crate::error::{CsvError, Result};
use crate::mode::Mode;

/// Ownership state of the single stream a reader or writer may hold
pub(crate) enum StreamState<T> {
    Unopened,
    Open(T),
    Disposed,
}

impl<T> StreamState<T> {
    pub(crate) fn is_unopened(&self) -> bool {
        matches!(self, StreamState::Unopened)
    }

    pub(crate) fn is_open(&self) -> bool {
        matches!(self, StreamState::Open(_))
    }

    /// Borrow the live stream, or report why there is none
    pub(crate) fn get_mut(&mut self, mode: Mode) -> Result<&mut T> {
        match self {
            StreamState::Open(stream) => Ok(stream),
            StreamState::Unopened => Err(CsvError::UninitializedStream(mode)),
            StreamState::Disposed => Err(CsvError::StreamClosed(mode)),
        }
    }

    /// Move to `Disposed`, handing back the stream if one was open
    pub(crate) fn take(&mut self) -> Option<T> {
        match std::mem::replace(self, StreamState::Disposed) {
            StreamState::Open(stream) => Some(stream),
            _ => None,
        }
    }
}
