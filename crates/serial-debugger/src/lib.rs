//! Debug printing for serial consoles that compiles out when disabled.
//!
//! With the `debug` feature on (the default), [`debug!`] and [`debugln!`]
//! write a value's `Display` text to a sink, usually a UART. With the feature
//! off they expand to nothing and their arguments are never evaluated.
//!
//! Two ways to reach a sink:
//! - the global macros [`debug!`] / [`debugln!`] write to a sink installed once
//!   at startup with [`install`];
//! - [`debug_to!`] / [`debugln_to!`] and [`Debugger`] take the sink explicitly,
//!   which is what tests use.
//!
//! ```
//! use serial_debugger::{debugln_to, CaptureSink};
//!
//! let mut out = CaptureSink::new();
//! debugln_to!(out, "ready");
//! # if serial_debugger::DEBUG_ENABLED {
//! assert_eq!(out.as_str(), "ready\n");
//! # }
//! ```

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
mod capture;
mod config;
#[cfg(feature = "defmt")]
mod defmt_sink;
mod error;
mod facade;
mod global;
#[cfg(any(feature = "defmt", test))]
mod line_buffer;
mod macros;
mod sink;

#[cfg(feature = "alloc")]
pub use capture::CaptureSink;
pub use config::{is_enabled, DEBUG_ENABLED};
#[cfg(feature = "defmt")]
pub use defmt_sink::DefmtSink;
pub use error::InstallError;
pub use facade::Debugger;
pub use global::{_debug, _debugln, _newline, install, is_installed, uninstall};
#[cfg(feature = "defmt")]
pub use line_buffer::LINE_CAPACITY;
pub use sink::{SerialSink, Sink, SERIAL_LINE_TERMINATOR};

#[doc(hidden)]
pub mod __private {
    pub use crate::facade::Emit;
}
