//! In-memory sink for tests and host tooling.

use alloc::string::String;
use core::fmt;

use crate::sink::Sink;

/// Sink that appends everything it receives to a `String`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSink {
    buf: String,
    terminator: &'static str,
}

impl CaptureSink {
    /// Creates an empty capture that ends lines with `"\n"`.
    pub const fn new() -> Self {
        Self::with_line_terminator("\n")
    }

    /// Creates an empty capture that ends lines with `terminator`.
    ///
    /// With an empty `terminator` nothing marks the end of a line, so
    /// [`lines`](Self::lines) yields nothing; the raw text is still in
    /// [`as_str`](Self::as_str).
    pub const fn with_line_terminator(terminator: &'static str) -> Self {
        Self {
            buf: String::new(),
            terminator,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Returns the captured text and leaves the buffer empty.
    pub fn take(&mut self) -> String {
        core::mem::take(&mut self.buf)
    }

    /// Iterates over completed lines, without their terminators.
    ///
    /// Text after the last terminator is not a completed line and is skipped.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        let terminator = self.terminator;
        self.buf
            .split_inclusive(terminator)
            .filter(move |_| !terminator.is_empty())
            .filter_map(move |line| line.strip_suffix(terminator))
    }
}

impl Default for CaptureSink {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for CaptureSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

impl Sink for CaptureSink {
    fn line_terminator(&self) -> &'static str {
        self.terminator
    }
}
