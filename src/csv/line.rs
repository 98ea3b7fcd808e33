//! Line-level helpers shared by the reader and writer.
//!
//! Fields are split and joined on the literal separator character. There is
//! no quoting, so a separator inside a field is indistinguishable from a
//! field boundary.

use std::io::{self, BufRead};

/// Byte-order mark some exporters put in front of the first line
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Read one raw line into `line`, without its terminator.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`. Returns `false` only when
/// the stream is exhausted and nothing was read; a final line without a
/// terminator is still a line.
pub(crate) fn read_line_bytes<R: BufRead>(reader: &mut R, line: &mut Vec<u8>) -> io::Result<bool> {
    line.clear();
    let mut read_any = false;

    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(read_any);
        }
        read_any = true;

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                let terminator = available[end];
                line.extend_from_slice(&available[..end]);
                reader.consume(end + 1);
                if terminator == b'\r' {
                    skip_linefeed(reader)?;
                }
                return Ok(true);
            }
            None => {
                let len = available.len();
                line.extend_from_slice(available);
                reader.consume(len);
            }
        }
    }
}

/// Consume the `\n` of a `\r\n` pair, if it is there
fn skip_linefeed<R: BufRead>(reader: &mut R) -> io::Result<()> {
    loop {
        match reader.fill_buf() {
            Ok(available) => {
                if available.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                return Ok(());
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Decode a raw line, replacing invalid UTF-8 with U+FFFD.
///
/// A byte-order mark is dropped from the first line only.
pub(crate) fn decode_line(bytes: &[u8], first_line: bool) -> String {
    let text = String::from_utf8_lossy(bytes);
    match text.strip_prefix(BYTE_ORDER_MARK) {
        Some(rest) if first_line => rest.to_string(),
        _ => text.into_owned(),
    }
}

/// Split a line into its first two fields.
///
/// Returns the first field and, when present, the second. Fields past the
/// second are ignored.
pub(crate) fn first_two_fields(line: &str, separator: char) -> (&str, Option<&str>) {
    let mut fields = line.splitn(3, separator);
    // splitn always yields at least one item, even for ""
    let first = fields.next().unwrap_or("");
    (first, fields.next())
}

/// Join fields into a single line body (no terminator)
pub(crate) fn join_fields<I, S>(fields: I, separator: char) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            line.push(separator);
        }
        line.push_str(field.as_ref());
    }
    line
}
