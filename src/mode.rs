//! Open mode selection for the compatibility facade.

use std::fmt;

/// Which underlying stream a facade `open` call routes to.
///
/// The two values are mutually exclusive. Raw integers from older call
/// sites enter through [`Mode::from_raw`]; anything other than `1` or `2`
/// has no `Mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Mode {
    Read = 1,
    Write = 2,
}

impl Mode {
    /// The historical integer tag of this mode
    pub fn raw(self) -> i32 {
        self as i32
    }

    /// Map a historical integer tag back to a mode
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            1 => Some(Mode::Read),
            2 => Some(Mode::Write),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Read => f.write_str("read"),
            Mode::Write => f.write_str("write"),
        }
    }
}
