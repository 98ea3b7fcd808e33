//! Record Writer
//!
//! Creates (or truncates) a delimited file and appends one line per record.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::Config;
use crate::diagnostics::{default_sink, Diagnostic, SharedSink};
use crate::error::Result;
use crate::mode::Mode;

use super::line::join_fields;
use super::StreamState;

/// Writes records to a delimited text file
///
/// Lines are buffered; they reach the file on [`flush`](Self::flush),
/// [`dispose`](Self::dispose) or drop.
pub struct CsvWriter {
    /// Separator and line ending, fixed at construction
    config: Config,
    /// The one output stream this writer may own
    stream: StreamState<BufWriter<File>>,
    /// Number of records written
    records_written: u64,
    /// Receiver for double-open diagnostics
    sink: SharedSink,
}

impl CsvWriter {
    /// Create a writer using `separator` and the platform line ending
    pub fn new(separator: char) -> Result<Self> {
        Self::with_sink(separator, default_sink())
    }

    /// Create a writer delivering diagnostics to `sink`
    pub fn with_sink(separator: char, sink: SharedSink) -> Result<Self> {
        let config = Config::builder().separator(separator).build();
        Self::with_config(config, sink)
    }

    /// Create a writer from `config`, rejecting separators that are line
    /// terminators
    pub fn with_config(config: Config, sink: SharedSink) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config, sink))
    }

    /// Build from an already validated config
    pub(crate) fn from_config(config: Config, sink: SharedSink) -> Self {
        Self {
            config,
            stream: StreamState::Unopened,
            records_written: 0,
            sink,
        }
    }

    /// Open `path` for writing, creating it or discarding existing content.
    ///
    /// Only the first call acquires a stream. Any later call emits
    /// [`Diagnostic::AlreadyOpen`] and leaves the writer as it was.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if !self.stream.is_unopened() {
            self.sink.emit(Diagnostic::AlreadyOpen {
                mode: Mode::Write,
                path: path.to_path_buf(),
            });
            return Ok(());
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        self.stream = StreamState::Open(BufWriter::new(file));
        tracing::debug!(path = %path.display(), "opened write stream");
        Ok(())
    }

    /// Append one record. Zero fields produce an empty line.
    pub fn write<I, S>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stream = self.stream.get_mut(Mode::Write)?;

        let line = join_fields(fields, self.config.separator);
        stream.write_all(line.as_bytes())?;
        stream.write_all(self.config.line_ending.as_str().as_bytes())?;

        self.records_written += 1;
        Ok(())
    }

    /// Push buffered lines to the file without closing it
    pub fn flush(&mut self) -> Result<()> {
        self.stream.get_mut(Mode::Write)?.flush()?;
        Ok(())
    }

    /// Number of records written
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    pub fn is_open(&self) -> bool {
        self.stream.is_open()
    }

    /// Flush and release the stream. Safe to call repeatedly or before `open`.
    pub fn dispose(&mut self) -> Result<()> {
        if let Some(mut stream) = self.stream.take() {
            stream.flush()?;
            tracing::debug!(records = self.records_written, "disposed write stream");
        }
        Ok(())
    }
}

impl Drop for CsvWriter {
    fn drop(&mut self) {
        if let Err(e) = self.dispose() {
            tracing::warn!("Failed to flush write stream on drop: {}", e);
        }
    }
}
