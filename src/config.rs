//! Configuration for addrbook-csv
//!
//! Centralized configuration with sensible defaults.

use crate::error::{CsvError, Result};

/// Field separator used when none is configured
pub const DEFAULT_SEPARATOR: char = '\t';

/// Codec configuration shared by a reader/writer pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Character splitting fields on read and joining them on write.
    /// Fixed for the lifetime of a reader or writer.
    pub separator: char,

    /// Terminator appended to every written line
    pub line_ending: LineEnding,
}

/// Line terminator written after each record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Whatever the host platform uses (CRLF on Windows, LF elsewhere)
    #[default]
    Platform,

    /// `\n`
    Lf,

    /// `\r\n`
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Platform => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            line_ending: LineEnding::Platform,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject separators that could never round-trip through a line
    pub fn validate(&self) -> Result<()> {
        if self.separator == '\n' || self.separator == '\r' {
            return Err(CsvError::Config(format!(
                "separator {:?} is a line terminator",
                self.separator
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the field separator
    pub fn separator(mut self, separator: char) -> Self {
        self.config.separator = separator;
        self
    }

    /// Set the line ending used on write
    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.config.line_ending = line_ending;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
