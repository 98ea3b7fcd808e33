//! Compatibility Module
//!
//! A single Open/Read/Write/Close surface over one [`CsvReader`] and one
//! [`CsvWriter`], kept for call sites written against the combined API.
//! New code should use the reader and writer directly.

use std::path::Path;

use crate::config::Config;
use crate::csv::{CsvReader, CsvWriter};
use crate::diagnostics::{default_sink, SharedSink};
use crate::error::{CsvError, Result};
use crate::mode::Mode;

/// Combined reader/writer behind the historical API
///
/// Both components exist for the whole lifetime of the facade, whichever
/// mode is used. [`close`](Self::close) disposes both.
pub struct CsvReaderWriter {
    reader: CsvReader,
    writer: CsvWriter,
}

impl CsvReaderWriter {
    /// Tab-separated facade logging through `tracing`
    pub fn new() -> Self {
        let config = Config::default();
        let sink = default_sink();
        Self {
            reader: CsvReader::from_config(config, sink.clone()),
            writer: CsvWriter::from_config(config, sink),
        }
    }

    /// Facade with an explicit config and diagnostic sink
    pub fn with_config(config: Config, sink: SharedSink) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader: CsvReader::from_config(config, sink.clone()),
            writer: CsvWriter::from_config(config, sink),
        })
    }

    /// Open `path` on the reader or the writer, depending on `mode`
    pub fn open(&mut self, path: impl AsRef<Path>, mode: Mode) -> Result<()> {
        match mode {
            Mode::Read => self.reader.open(path),
            Mode::Write => self.writer.open(path),
        }
    }

    /// Open using a historical integer mode tag.
    ///
    /// Values other than 1 (read) and 2 (write) fail with
    /// [`CsvError::InvalidMode`] before any file is touched.
    pub fn open_raw(&mut self, path: impl AsRef<Path>, mode: i32) -> Result<()> {
        let path = path.as_ref();
        let mode = Mode::from_raw(mode).ok_or_else(|| CsvError::InvalidMode {
            mode,
            path: path.to_path_buf(),
        })?;
        self.open(path, mode)
    }

    /// Read the next record; `Ok(None)` at end of input
    pub fn read(&mut self) -> Result<Option<(String, String)>> {
        self.reader.read()
    }

    /// Historical two-argument read. See [`CsvReader::read_legacy`].
    #[deprecated(note = "kept for backwards compatibility only; use `read`")]
    #[allow(deprecated)]
    pub fn read_legacy(&mut self, first: &str, second: &str) -> Result<bool> {
        self.reader.read_legacy(first, second)
    }

    /// Write one record
    pub fn write<I, S>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.writer.write(fields)
    }

    /// Dispose both the reader and the writer.
    ///
    /// Both are always disposed; a flush failure on the writer is
    /// returned after the reader has been released.
    pub fn close(&mut self) -> Result<()> {
        let written = self.writer.dispose();
        self.reader.dispose();
        written
    }

    pub fn reader(&mut self) -> &mut CsvReader {
        &mut self.reader
    }

    pub fn writer(&mut self) -> &mut CsvWriter {
        &mut self.writer
    }
}

impl Default for CsvReaderWriter {
    fn default() -> Self {
        Self::new()
    }
}
