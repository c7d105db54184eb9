//! Debug macros.
//!
//! Each macro expands to `if DEBUG_ENABLED { ... }`. With the `debug` feature
//! off the body is still type-checked but never runs, so arguments are not
//! evaluated and the call leaves nothing in the binary.

/// Writes a value to the installed global sink, without a newline.
///
/// ```
/// serial_debugger::debug!(42);
/// ```
#[macro_export]
macro_rules! debug {
    ($value:expr $(,)?) => {
        if $crate::DEBUG_ENABLED {
            $crate::_debug(&$value);
        }
    };
}

/// Writes a value and a line terminator to the installed global sink.
///
/// With no arguments only the terminator is written.
#[macro_export]
macro_rules! debugln {
    () => {
        if $crate::DEBUG_ENABLED {
            $crate::_newline();
        }
    };
    ($value:expr $(,)?) => {
        if $crate::DEBUG_ENABLED {
            $crate::_debugln(&$value);
        }
    };
}

/// Writes a value to `sink`, without a newline.
///
/// `sink` may be a [`Sink`](crate::Sink) or a `&mut` to one.
///
/// ```
/// use serial_debugger::{debug_to, CaptureSink};
///
/// let mut out = CaptureSink::new();
/// debug_to!(out, "temp=");
/// debug_to!(out, 21);
/// # if serial_debugger::DEBUG_ENABLED {
/// assert_eq!(out.as_str(), "temp=21");
/// # }
/// ```
#[macro_export]
macro_rules! debug_to {
    ($sink:expr, $value:expr $(,)?) => {
        if $crate::DEBUG_ENABLED {
            #[allow(unused_imports)]
            use $crate::__private::Emit as _;
            $sink.__debug_value(&$value);
        }
    };
}

/// Writes a value and the sink's line terminator to `sink`.
///
/// With only a sink, writes just the terminator.
#[macro_export]
macro_rules! debugln_to {
    ($sink:expr $(,)?) => {
        if $crate::DEBUG_ENABLED {
            #[allow(unused_imports)]
            use $crate::__private::Emit as _;
            $sink.__debug_newline();
        }
    };
    ($sink:expr, $value:expr $(,)?) => {
        if $crate::DEBUG_ENABLED {
            #[allow(unused_imports)]
            use $crate::__private::Emit as _;
            $sink.__debugln_value(&$value);
        }
    };
}
