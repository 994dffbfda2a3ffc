//! Lossy line decoding.
//!
//! Log files are read as bytes and decoded line by line. Decoding never
//! fails: byte sequences that are not valid UTF-8 are dropped, so a line may
//! lose characters but a file is never rejected for its encoding. I/O errors
//! are still reported.

use std::io::{self, BufRead};

/// Decodes UTF-8, dropping invalid byte sequences.
#[must_use]
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Removes one trailing `\n` or `\r\n`.
fn strip_line_ending(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}

/// Iterator over the decoded lines of a reader, terminators stripped.
///
/// After the first I/O error the iterator yields that error and then ends.
pub struct DecodedLines<R> {
    reader: R,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> DecodedLines<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for DecodedLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                strip_line_ending(&mut self.buf);
                Some(Ok(decode_lossy(&self.buf)))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    /// Yields `data`, then fails.
    struct FailingReader {
        data: Cursor<Vec<u8>>,
    }

    impl FailingReader {
        fn new(data: &[u8]) -> Self {
            Self {
                data: Cursor::new(data.to_vec()),
            }
        }
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.data.read(buf)?;
            if n == 0 {
                return Err(io::Error::other("disk went away"));
            }
            Ok(n)
        }
    }

    fn lines(input: &[u8]) -> Vec<String> {
        DecodedLines::new(Cursor::new(input.to_vec()))
            .collect::<io::Result<Vec<_>>>()
            .expect("in-memory read")
    }

    #[test]
    fn decode_keeps_valid_utf8() {
        assert_eq!(decode_lossy("héllo 世界".as_bytes()), "héllo 世界");
    }

    #[test]
    fn decode_drops_invalid_bytes() {
        assert_eq!(decode_lossy(b"ab\xffcd\xc3"), "abcd");
        assert_eq!(decode_lossy(b"\xfe\xff"), "");
    }

    #[test]
    fn decode_drops_truncated_sequence_mid_line() {
        // First two bytes of a three-byte sequence, then ASCII.
        assert_eq!(decode_lossy(b"x\xe4\xb8y"), "xy");
    }

    #[test]
    fn lines_strip_terminators() {
        assert_eq!(lines(b"a\nb\r\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn lines_keep_empty_lines() {
        assert_eq!(lines(b"a\n\nb\n"), vec!["a", "", "b"]);
    }

    #[test]
    fn lines_empty_input() {
        assert!(lines(b"").is_empty());
    }

    #[test]
    fn lines_decode_each_line_independently() {
        assert_eq!(lines(b"ok\n\xffbad\nok2\n"), vec!["ok", "bad", "ok2"]);
    }

    #[test]
    fn lines_surface_read_error_once() {
        let reader = BufReader::new(FailingReader::new(b"first\nsecond"));
        let items: Vec<io::Result<String>> = DecodedLines::new(reader).collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_ref().ok().map(String::as_str), Some("first"));
        assert!(items[1].is_err());
    }
}
