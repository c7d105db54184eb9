//! Fixed-capacity line assembly for sinks that emit whole lines.

/// Longest partial line held before it is flushed early.
pub const LINE_CAPACITY: usize = 128;

/// Collects characters into lines and hands each finished line to a callback.
///
/// `'\n'` ends a line, `'\r'` is dropped. A line longer than
/// [`LINE_CAPACITY`] bytes is handed over in pieces, always at a character
/// boundary.
pub(crate) struct LineBuffer {
    buf: [u8; LINE_CAPACITY],
    len: usize,
}

impl LineBuffer {
    pub(crate) const fn new() -> Self {
        Self {
            buf: [0; LINE_CAPACITY],
            len: 0,
        }
    }

    pub(crate) fn pending(&self) -> &str {
        // Only whole chars are ever pushed.
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    pub(crate) fn push_str(&mut self, s: &str, mut on_line: impl FnMut(&str)) {
        for c in s.chars() {
            self.push(c, &mut on_line);
        }
    }

    /// Hands over the pending partial line, if any.
    pub(crate) fn flush(&mut self, mut on_line: impl FnMut(&str)) {
        if self.len > 0 {
            self.emit_line(&mut on_line);
        }
    }

    fn emit_line(&mut self, on_line: &mut impl FnMut(&str)) {
        on_line(self.pending());
        self.len = 0;
    }

    fn push(&mut self, c: char, on_line: &mut impl FnMut(&str)) {
        match c {
            '\n' => self.emit_line(on_line),
            '\r' => {}
            _ => {
                let mut utf8 = [0u8; 4];
                let encoded = c.encode_utf8(&mut utf8).as_bytes();
                if self.len + encoded.len() > LINE_CAPACITY {
                    self.emit_line(on_line);
                }
                self.buf[self.len..self.len + encoded.len()].copy_from_slice(encoded);
                self.len += encoded.len();
            }
        }
    }
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use alloc::{
        string::{String, ToString},
        vec::Vec,
    };

    fn feed(buffer: &mut LineBuffer, text: &str) -> Vec<String> {
        let mut lines = Vec::new();
        buffer.push_str(text, |line| lines.push(line.to_string()));
        lines
    }

    #[test]
    fn test_long_ascii_line_flushes_at_capacity() {
        let mut buffer = LineBuffer::new();
        let text: String = core::iter::repeat('x').take(130).collect();
        let lines = feed(&mut buffer, &text);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), LINE_CAPACITY);
        assert_eq!(buffer.pending(), "xx");
    }

    #[test]
    fn test_multibyte_char_not_split_at_capacity() {
        let mut buffer = LineBuffer::new();
        let mut text: String = core::iter::repeat('a').take(LINE_CAPACITY - 1).collect();
        // Two bytes, would straddle the boundary.
        text.push('é');
        let lines = feed(&mut buffer, &text);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), LINE_CAPACITY - 1);
        assert!(lines[0].bytes().all(|b| b == b'a'));
        assert_eq!(buffer.pending(), "é");
    }

    #[test]
    fn test_carriage_return_dropped() {
        let mut buffer = LineBuffer::new();
        let lines = feed(&mut buffer, "a\r\nb\n");
        assert_eq!(lines, ["a", "b"]);
        assert_eq!(buffer.pending(), "");
    }

    #[test]
    fn test_empty_line_still_emitted() {
        let mut buffer = LineBuffer::new();
        let lines = feed(&mut buffer, "\n");
        assert_eq!(lines, [""]);
    }

    #[test]
    fn test_flush_partial_line() {
        let mut buffer = LineBuffer::new();
        assert!(feed(&mut buffer, "tick ").is_empty());
        assert!(feed(&mut buffer, "42").is_empty());

        let mut flushed = Vec::new();
        buffer.flush(|line| flushed.push(line.to_string()));
        assert_eq!(flushed, ["tick 42"]);
        assert_eq!(buffer.pending(), "");

        buffer.flush(|line| flushed.push(line.to_string()));
        assert_eq!(flushed.len(), 1);
    }
}
