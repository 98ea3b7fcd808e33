//! Diagnostics Module
//!
//! Non-fatal events raised by readers and writers. These never become
//! errors; they are handed to a [`DiagnosticSink`] owned by each component.
//!
//! ## Sinks
//! - [`TracingSink`]: forwards every event to `tracing::warn!` (default)
//! - [`RecordingSink`]: keeps events in memory for inspection

use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::mode::Mode;

/// A non-fatal event observed while opening or reading a stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `open` was called on a component whose stream was already acquired.
    /// The existing stream is kept.
    AlreadyOpen { mode: Mode, path: PathBuf },

    /// A line had fewer than two fields; the second field was read as `""`.
    ShortLine { line_number: u64 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::AlreadyOpen { mode, path } => write!(
                f,
                "Attempt made to open {} stream for '{}' when {} stream is already open",
                mode,
                path.display(),
                mode
            ),
            Diagnostic::ShortLine { line_number } => write!(
                f,
                "Expected at least two columns but only one was found on line {}",
                line_number
            ),
        }
    }
}

/// Receiver for non-fatal diagnostics
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: Diagnostic);
}

/// Shared handle to a sink, cloned into every component of a facade
pub type SharedSink = Arc<dyn DiagnosticSink>;

/// Default sink: structured `tracing` warnings
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::AlreadyOpen { mode, path } => {
                tracing::warn!(%mode, path = %path.display(), "{}", diagnostic);
            }
            Diagnostic::ShortLine { line_number } => {
                tracing::warn!(line_number = *line_number, "{}", diagnostic);
            }
        }
    }
}

/// Sink that stores every diagnostic it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of the diagnostics received so far
    pub fn events(&self) -> Vec<Diagnostic> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.events().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        match self.events.lock() {
            Ok(mut events) => events.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}

/// The sink used when a component is built without one
pub fn default_sink() -> SharedSink {
    Arc::new(TracingSink)
}
