// Line reading that tolerates non-UTF-8 input.
//
// Texts and datasets may come from single-byte encodings (Latin-1 novels,
// old CSV exports). Each raw line is decoded with `from_utf8_lossy`, so an
// undecodable byte becomes U+FFFD instead of failing the whole read.

use std::io::{self, BufRead};

/// Iterator over the lines of a reader, decoded lossily.
///
/// Like `BufRead::lines`, the trailing `\n` or `\r\n` is stripped.
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LossyLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(bytes: &[u8]) -> Vec<String> {
        LossyLines::new(bytes).collect::<io::Result<_>>().unwrap()
    }

    #[test]
    fn test_strips_line_endings() {
        assert_eq!(collect(b"one\r\ntwo\nthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_blank_lines_kept() {
        assert_eq!(collect(b"a\n\nb\n"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        assert_eq!(collect(b"Caf\xe9 society"), vec!["Caf\u{fffd} society"]);
    }
}
