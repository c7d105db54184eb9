//! Character-output sinks.

use core::fmt::{self, Write};

/// Line terminator written by [`SerialSink`], matching Arduino `println`.
pub const SERIAL_LINE_TERMINATOR: &str = "\r\n";

/// Destination for debug text.
///
/// Any [`fmt::Write`] can be a sink. The facade never opens, flushes or closes
/// it; the caller sets it up before the first write.
pub trait Sink: Write {
    /// Text written after each `debugln`.
    fn line_terminator(&self) -> &'static str {
        "\n"
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn line_terminator(&self) -> &'static str {
        (**self).line_terminator()
    }
}

#[cfg(feature = "alloc")]
impl Sink for alloc::string::String {}

/// Wraps a serial writer (for example a UART driver) as a [`Sink`].
///
/// Lines end in `"\r\n"`.
pub struct SerialSink<W> {
    inner: W,
}

impl<W: Write> SerialSink<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for SerialSink<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_str(s)
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.inner.write_char(c)
    }
}

impl<W: Write> Sink for SerialSink<W> {
    fn line_terminator(&self) -> &'static str {
        SERIAL_LINE_TERMINATOR
    }
}
