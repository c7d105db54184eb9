//! The debug facade: write a value, optionally followed by a line terminator.

use core::fmt::{Display, Write};

use crate::{config::DEBUG_ENABLED, sink::Sink};

/// Writes `value` and, if `newline`, the sink's line terminator.
///
/// `ENABLED` is a const parameter so the disabled instantiation is empty.
/// Sink errors are dropped.
#[inline(always)]
fn emit<const ENABLED: bool, S, T>(sink: &mut S, value: &T, newline: bool)
where
    S: Sink + ?Sized,
    T: Display + ?Sized,
{
    if !ENABLED {
        return;
    }
    let _ = write!(sink, "{}", value);
    if newline {
        emit_terminator::<ENABLED, S>(sink);
    }
}

#[inline(always)]
fn emit_terminator<const ENABLED: bool, S: Sink + ?Sized>(sink: &mut S) {
    if !ENABLED {
        return;
    }
    let terminator = sink.line_terminator();
    let _ = sink.write_str(terminator);
}

/// Owns (or borrows) a sink and writes debug text to it.
///
/// Unlike the macros, these are ordinary methods: arguments are evaluated even
/// when debug output is compiled out, they just produce no output.
///
/// ```
/// use serial_debugger::{CaptureSink, Debugger};
///
/// let mut dbg = Debugger::new(CaptureSink::new());
/// dbg.debug("x = ");
/// dbg.debugln(42);
/// # if serial_debugger::DEBUG_ENABLED {
/// assert_eq!(dbg.sink().as_str(), "x = 42\n");
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Debugger<S> {
    sink: S,
}

impl<S: Sink> Debugger<S> {
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Writes `value` with no trailing newline.
    #[inline(always)]
    pub fn debug(&mut self, value: impl Display) {
        emit::<DEBUG_ENABLED, S, _>(&mut self.sink, &value, false);
    }

    /// Writes `value` followed by one line terminator.
    #[inline(always)]
    pub fn debugln(&mut self, value: impl Display) {
        emit::<DEBUG_ENABLED, S, _>(&mut self.sink, &value, true);
    }

    /// Writes just the line terminator.
    #[inline(always)]
    pub fn newline(&mut self) {
        emit_terminator::<DEBUG_ENABLED, S>(&mut self.sink);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}

/// Method-call entry points for the `*_to!` macros.
///
/// Method syntax lets the macros accept either a sink or a `&mut` to one, the
/// same way `write!` does. Calling these directly still honors
/// [`DEBUG_ENABLED`].
#[doc(hidden)]
pub trait Emit: Sink {
    #[inline(always)]
    fn __debug_value<T: Display + ?Sized>(&mut self, value: &T) {
        emit::<DEBUG_ENABLED, Self, T>(self, value, false);
    }

    #[inline(always)]
    fn __debugln_value<T: Display + ?Sized>(&mut self, value: &T) {
        emit::<DEBUG_ENABLED, Self, T>(self, value, true);
    }

    #[inline(always)]
    fn __debug_newline(&mut self) {
        emit_terminator::<DEBUG_ENABLED, Self>(self);
    }
}

impl<S: Sink + ?Sized> Emit for S {}

/// Entry points for the global sink, see [`crate::global`].
#[inline(always)]
pub(crate) fn write_value<S, T>(sink: &mut S, value: &T, newline: bool)
where
    S: Sink + ?Sized,
    T: Display + ?Sized,
{
    emit::<DEBUG_ENABLED, S, T>(sink, value, newline);
}

#[inline(always)]
pub(crate) fn write_terminator<S: Sink + ?Sized>(sink: &mut S) {
    emit_terminator::<DEBUG_ENABLED, S>(sink);
}
