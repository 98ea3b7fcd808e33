//! Record Reader
//!
//! Reads a delimited file one line at a time, yielding the first two fields.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::Config;
use crate::diagnostics::{default_sink, Diagnostic, SharedSink};
use crate::error::{CsvError, Result};
use crate::mode::Mode;

use super::line::{decode_line, first_two_fields, read_line_bytes};
use super::StreamState;

/// Reads records from a delimited text file
pub struct CsvReader {
    /// Field separator, fixed at construction
    separator: char,
    /// The one input stream this reader may own
    stream: StreamState<BufReader<File>>,
    /// Lines consumed so far (1-based once the first line is read)
    line_number: u64,
    /// Raw bytes of the line being decoded, reused between reads
    buffer: Vec<u8>,
    /// Receiver for double-open and short-line diagnostics
    sink: SharedSink,
}

impl CsvReader {
    /// Create a reader that logs diagnostics through `tracing`
    pub fn new(separator: char) -> Result<Self> {
        Self::with_sink(separator, default_sink())
    }

    /// Create a reader delivering diagnostics to `sink`
    pub fn with_sink(separator: char, sink: SharedSink) -> Result<Self> {
        let config = Config::builder().separator(separator).build();
        Self::with_config(config, sink)
    }

    /// Create a reader from `config`, rejecting separators that are line
    /// terminators
    pub fn with_config(config: Config, sink: SharedSink) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config, sink))
    }

    /// Build from an already validated config
    pub(crate) fn from_config(config: Config, sink: SharedSink) -> Self {
        Self {
            separator: config.separator,
            stream: StreamState::Unopened,
            line_number: 0,
            buffer: Vec::new(),
            sink,
        }
    }

    /// Open `path` for reading.
    ///
    /// Only the first call acquires a stream. Any later call emits
    /// [`Diagnostic::AlreadyOpen`] and leaves the reader as it was.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if !self.stream.is_unopened() {
            self.sink.emit(Diagnostic::AlreadyOpen {
                mode: Mode::Read,
                path: path.to_path_buf(),
            });
            return Ok(());
        }

        let file = File::open(path)?;
        self.stream = StreamState::Open(BufReader::new(file));
        tracing::debug!(path = %path.display(), "opened read stream");
        Ok(())
    }

    /// Read the next record.
    ///
    /// Returns:
    /// - `Ok(Some((first, second)))` for each line, where `second` is `""`
    ///   if the line had no separator
    /// - `Ok(None)` once every line has been consumed
    pub fn read(&mut self) -> Result<Option<(String, String)>> {
        let Some(line) = self.next_line()? else {
            return Ok(None);
        };

        let (first, second) = first_two_fields(&line, self.separator);
        let second = match second {
            Some(second) => second.to_string(),
            None => {
                self.sink.emit(Diagnostic::ShortLine {
                    line_number: self.line_number,
                });
                String::new()
            }
        };

        Ok(Some((first.to_string(), second)))
    }

    /// Historical two-argument read.
    ///
    /// The arguments are ignored and never written. The next line is read
    /// without an end-of-input check, so calling this after the last line
    /// fails with [`CsvError::LegacyReadExhausted`] instead of returning
    /// `false`. A line without a second field fails with
    /// [`CsvError::LegacyMissingField`]. It never returns `Ok(false)`.
    #[deprecated(note = "kept for backwards compatibility only; use `read`")]
    pub fn read_legacy(&mut self, _first: &str, _second: &str) -> Result<bool> {
        let line = self.next_line()?.ok_or(CsvError::LegacyReadExhausted)?;

        match first_two_fields(&line, self.separator) {
            (_, Some(_)) => Ok(true),
            (_, None) => Err(CsvError::LegacyMissingField {
                line_number: self.line_number,
            }),
        }
    }

    /// Number of lines consumed so far
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    pub fn is_open(&self) -> bool {
        self.stream.is_open()
    }

    /// Release the stream. Safe to call repeatedly or before `open`.
    pub fn dispose(&mut self) {
        if self.stream.take().is_some() {
            tracing::debug!(lines = self.line_number, "disposed read stream");
        }
    }

    /// Next line with its terminator removed.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, and a leading
    /// byte-order mark is dropped from the first line.
    fn next_line(&mut self) -> Result<Option<String>> {
        let stream = self.stream.get_mut(Mode::Read)?;

        if !read_line_bytes(stream, &mut self.buffer)? {
            return Ok(None);
        }

        self.line_number += 1;
        Ok(Some(decode_line(&self.buffer, self.line_number == 1)))
    }
}

impl Iterator for CsvReader {
    type Item = Result<(String, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read().transpose()
    }
}

impl Drop for CsvReader {
    fn drop(&mut self) {
        self.dispose();
    }
}
