//! Process-wide sink used by [`debug!`](crate::debug) and [`debugln!`](crate::debugln).
//!
//! The slot is guarded by a critical section, so the main loop and interrupt
//! handlers can both write to it on a single-core target.

use core::{cell::RefCell, fmt::Display};

use critical_section::Mutex;

use crate::{
    error::InstallError,
    facade::{write_terminator, write_value},
    sink::Sink,
};

type GlobalSink = &'static mut (dyn Sink + Send);

static SINK: Mutex<RefCell<Option<GlobalSink>>> = Mutex::new(RefCell::new(None));

/// Installs the sink that the global macros write to.
pub fn install(sink: GlobalSink) -> Result<(), InstallError> {
    critical_section::with(|cs| {
        let mut slot = SINK.borrow_ref_mut(cs);
        if slot.is_some() {
            return Err(InstallError::AlreadyInstalled);
        }
        *slot = Some(sink);
        Ok(())
    })
}

/// Removes the installed sink and hands it back.
pub fn uninstall() -> Option<GlobalSink> {
    critical_section::with(|cs| SINK.borrow_ref_mut(cs).take())
}

pub fn is_installed() -> bool {
    critical_section::with(|cs| SINK.borrow_ref(cs).is_some())
}

/// Runs `f` on the installed sink.
///
/// Does nothing when no sink is installed, or when called from inside a write
/// to the same sink.
fn with_sink(f: impl FnOnce(&mut (dyn Sink + Send + 'static))) {
    critical_section::with(|cs| {
        let Ok(mut slot) = SINK.borrow(cs).try_borrow_mut() else {
            return;
        };
        if let Some(sink) = slot.as_mut() {
            f(&mut **sink);
        }
    });
}

/// Print function used by the `debug!` macro.
#[doc(hidden)]
pub fn _debug<T: Display + ?Sized>(value: &T) {
    with_sink(|sink| write_value(sink, value, false));
}

/// Print function used by the `debugln!` macro.
#[doc(hidden)]
pub fn _debugln<T: Display + ?Sized>(value: &T) {
    with_sink(|sink| write_value(sink, value, true));
}

/// Print function used by `debugln!()` with no arguments.
#[doc(hidden)]
pub fn _newline() {
    with_sink(|sink| write_terminator(sink));
}
