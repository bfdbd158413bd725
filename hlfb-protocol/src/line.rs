//! Line assembly for incoming serial bytes
//!
//! Bytes accumulate until a `\n` or `\r` terminator. A line that outgrows the
//! buffer keeps its first [`LINE_CAPACITY`] bytes; the rest are dropped until
//! the terminator, and the truncated line is still delivered.

use heapless::Vec;

/// Maximum number of payload bytes kept per line
pub const LINE_CAPACITY: usize = 31;

/// A complete command line, terminator stripped
pub type Line = Vec<u8, LINE_CAPACITY>;

/// Fixed-capacity line accumulator
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    buffer: Line,
    overflowed: bool,
}

impl LineBuffer {
    /// Create an empty line buffer
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            overflowed: false,
        }
    }

    /// Feed a single byte
    ///
    /// Returns the completed line when `byte` is a terminator and at least one
    /// byte was buffered. Empty lines are swallowed, so `\r\n` yields one line.
    pub fn feed(&mut self, byte: u8) -> Option<Line> {
        match byte {
            b'\n' | b'\r' => {
                self.overflowed = false;
                if self.buffer.is_empty() {
                    None
                } else {
                    Some(core::mem::take(&mut self.buffer))
                }
            }
            _ => {
                if self.buffer.push(byte).is_err() {
                    self.overflowed = true;
                }
                None
            }
        }
    }

    /// Number of bytes buffered for the current line
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True if nothing is buffered
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// True if bytes of the current line have been dropped
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// Discard any partial line
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.overflowed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(buf: &mut LineBuffer, bytes: &[u8]) -> Option<Line> {
        let mut last = None;
        for &b in bytes {
            if let Some(line) = buf.feed(b) {
                last = Some(line);
            }
        }
        last
    }

    #[test]
    fn test_line_on_newline() {
        let mut buf = LineBuffer::new();
        let line = feed_all(&mut buf, b"START\n").unwrap();
        assert_eq!(&line[..], b"START");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_carriage_return_terminates() {
        let mut buf = LineBuffer::new();
        let line = feed_all(&mut buf, b"STOP\r").unwrap();
        assert_eq!(&line[..], b"STOP");
    }

    #[test]
    fn test_crlf_yields_single_line() {
        let mut buf = LineBuffer::new();
        let mut count = 0;
        for &b in b"HELP\r\n" {
            if buf.feed(b).is_some() {
                count += 1;
            }
        }
        assert_eq!(count, 1);
    }

    #[test]
    fn test_empty_line_ignored() {
        let mut buf = LineBuffer::new();
        assert!(buf.feed(b'\n').is_none());
        assert!(buf.feed(b'\r').is_none());
    }

    #[test]
    fn test_partial_line_waits() {
        let mut buf = LineBuffer::new();
        assert!(feed_all(&mut buf, b"MCT:").is_none());
        assert_eq!(buf.len(), 4);
        let line = feed_all(&mut buf, b"2\n").unwrap();
        assert_eq!(&line[..], b"MCT:2");
    }

    #[test]
    fn test_overflow_drops_excess() {
        let mut buf = LineBuffer::new();
        let long = [b'A'; LINE_CAPACITY + 10];
        assert!(feed_all(&mut buf, &long).is_none());
        assert!(buf.overflowed());
        assert_eq!(buf.len(), LINE_CAPACITY);

        let line = buf.feed(b'\n').unwrap();
        assert_eq!(line.len(), LINE_CAPACITY);
        assert!(line.iter().all(|&b| b == b'A'));

        // Terminator resets the buffer for the next line
        assert!(!buf.overflowed());
        let next = feed_all(&mut buf, b"STOP\n").unwrap();
        assert_eq!(&next[..], b"STOP");
    }

    #[test]
    fn test_reset_discards_partial() {
        let mut buf = LineBuffer::new();
        feed_all(&mut buf, b"ADJ:1");
        buf.reset();
        assert!(buf.is_empty());
        assert!(buf.feed(b'\n').is_none());
    }
}
