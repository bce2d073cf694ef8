use std::io::BufRead;

use log::debug;

use crate::error::Result;

/// Split one line into exactly `count` fields.
///
/// The first `count - 1` fields are terminated by `delimiter`; the last one
/// runs to the end of the line and may itself contain the delimiter. Fields
/// missing from a short line are returned as empty strings.
pub fn split_fields(line: &str, delimiter: char, count: usize) -> Vec<&str> {
    let mut fields: Vec<&str> = line.splitn(count, delimiter).collect();
    fields.resize(count, "");
    fields
}

/// Line-at-a-time reader over a text stream.
///
/// Lines are `\n` terminated; a trailing `\r` is dropped and blank lines are
/// skipped. Bytes that are not valid UTF-8 are replaced with U+FFFD. The scanner only tracks its cursor position, it holds no state
/// between records.
pub struct LineScanner<R> {
    reader: R,
    buf: Vec<u8>,
    line: String,
    line_number: usize,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: String::new(),
            line_number: 0,
        }
    }

    /// 1-based number of the last line returned by [`next_line`](Self::next_line).
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next non-blank line, or `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<&str>> {
        loop {
            self.buf.clear();
            if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            self.line.clear();
            match std::str::from_utf8(&self.buf) {
                Ok(text) => self.line.push_str(text),
                Err(_) => {
                    debug!("line {}: invalid UTF-8 replaced", self.line_number);
                    self.line.push_str(&String::from_utf8_lossy(&self.buf));
                }
            }

            if !self.line.trim().is_empty() {
                break;
            }
        }

        Ok(Some(self.line.trim_end_matches(['\n', '\r'])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fields_last_field_keeps_delimiters() {
        assert_eq!(split_fields("a;b;c;d", ';', 4), vec!["a", "b", "c", "d"]);
        assert_eq!(split_fields("a;b;c;d;e", ';', 4), vec!["a", "b", "c", "d;e"]);
        assert_eq!(split_fields("a|b", '|', 4), vec!["a", "b", "", ""]);
        assert_eq!(split_fields("", ';', 4), vec!["", "", "", ""]);
    }

    #[test]
    fn test_next_line_skips_blank_and_strips_crlf() {
        let input = "first\r\n\n   \nsecond\nlast";
        let mut scanner = LineScanner::new(input.as_bytes());

        assert_eq!(scanner.next_line().unwrap(), Some("first"));
        assert_eq!(scanner.line_number(), 1);
        assert_eq!(scanner.next_line().unwrap(), Some("second"));
        assert_eq!(scanner.line_number(), 4);
        assert_eq!(scanner.next_line().unwrap(), Some("last"));
        assert_eq!(scanner.next_line().unwrap(), None);
    }

    #[test]
    fn test_next_line_replaces_invalid_utf8() {
        let input: &[u8] = b"Caf\xe9\nnext\n";
        let mut scanner = LineScanner::new(input);

        assert_eq!(scanner.next_line().unwrap(), Some("Caf\u{FFFD}"));
        assert_eq!(scanner.next_line().unwrap(), Some("next"));
        assert_eq!(scanner.next_line().unwrap(), None);
    }
}
