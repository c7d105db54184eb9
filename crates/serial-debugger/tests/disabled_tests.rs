//! Tests for builds without the `debug` feature.
//!
//! Run with `cargo test -p serial-debugger --no-default-features --features alloc`.

#![cfg(all(not(feature = "debug"), feature = "alloc"))]

use std::cell::{Cell, RefCell};
use std::fmt;

use critical_section::Mutex;
use serial_debugger::__private::Emit;
use serial_debugger::{
    debug, debug_to, debugln, debugln_to, install, uninstall, CaptureSink, Debugger, Sink,
    DEBUG_ENABLED,
};

static CAPTURED: Mutex<RefCell<String>> = Mutex::new(RefCell::new(String::new()));

struct SharedCapture;

impl fmt::Write for SharedCapture {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        critical_section::with(|cs| CAPTURED.borrow_ref_mut(cs).push_str(s));
        Ok(())
    }
}

impl Sink for SharedCapture {}

#[test]
fn test_flag_is_off() {
    assert!(!DEBUG_ENABLED);
    assert!(!serial_debugger::is_enabled());
}

#[test]
fn test_macros_write_nothing() {
    let mut out = CaptureSink::new();
    debug_to!(out, 42);
    debugln_to!(out, "done");
    debugln_to!(out);
    assert!(out.is_empty());
}

#[test]
fn test_macro_arguments_not_evaluated() {
    let calls = Cell::new(0);
    let bump = || {
        calls.set(calls.get() + 1);
        calls.get()
    };
    let mut out = CaptureSink::new();
    debug_to!(out, bump());
    debugln_to!(out, bump());
    debug!(bump());
    debugln!(bump());
    assert_eq!(calls.get(), 0);
    assert!(out.is_empty());
}

#[test]
fn test_debugger_writes_nothing() {
    let mut dbg = Debugger::new(CaptureSink::new());
    dbg.debug(42);
    dbg.debugln("done");
    dbg.newline();
    assert!(dbg.sink().is_empty());
}

#[test]
fn test_emit_methods_write_nothing() {
    let mut out = CaptureSink::new();
    out.__debug_value("forced");
    out.__debugln_value("forced");
    out.__debug_newline();
    assert!(out.is_empty());
}

#[test]
fn test_global_entry_points_write_nothing() {
    install(Box::leak(Box::new(SharedCapture))).unwrap();
    serial_debugger::_debug("forced");
    serial_debugger::_debugln("forced");
    serial_debugger::_newline();
    debugln!("macro");
    assert!(uninstall().is_some());
    assert_eq!(critical_section::with(|cs| CAPTURED.borrow_ref(cs).clone()), "");
}
