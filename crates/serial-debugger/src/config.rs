//! Build-time switch for debug output.

/// Whether debug output is compiled in.
///
/// Set by the `debug` cargo feature (on by default). Every macro in this crate
/// checks this constant in a plain `if`, so with the feature off the branch is
/// folded away and nothing is left in the binary.
pub const DEBUG_ENABLED: bool = cfg!(feature = "debug");

/// Returns [`DEBUG_ENABLED`].
#[inline(always)]
pub const fn is_enabled() -> bool {
    DEBUG_ENABLED
}
