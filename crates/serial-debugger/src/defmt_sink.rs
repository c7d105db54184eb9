//! Sink that forwards debug lines to `defmt`.

use core::fmt;

use crate::{line_buffer::LineBuffer, sink::Sink};

fn log_line(line: &str) {
    defmt::println!("{=str}", line);
}

/// Collects text until a newline, then logs the line with `defmt::println!`.
///
/// `defmt` frames are whole messages, so partial writes from `debug!` are kept
/// in a fixed buffer. A line longer than [`LINE_CAPACITY`](crate::LINE_CAPACITY)
/// bytes is split into several frames at a character boundary. `'\r'` is
/// dropped.
pub struct DefmtSink {
    lines: LineBuffer,
}

impl DefmtSink {
    pub const fn new() -> Self {
        Self {
            lines: LineBuffer::new(),
        }
    }

    /// Logs the pending partial line, if any.
    pub fn flush(&mut self) {
        self.lines.flush(log_line);
    }

    /// Text waiting for a newline.
    pub fn pending(&self) -> &str {
        self.lines.pending()
    }
}

impl Default for DefmtSink {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for DefmtSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.lines.push_str(s, log_line);
        Ok(())
    }
}

impl Sink for DefmtSink {}

impl Drop for DefmtSink {
    fn drop(&mut self) {
        self.flush();
    }
}
