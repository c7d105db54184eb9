//! Error types for the global sink slot.

/// Errors returned by [`install`](crate::install).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallError {
    /// A sink is already installed. Call [`uninstall`](crate::uninstall) first.
    AlreadyInstalled,
}

impl core::fmt::Display for InstallError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InstallError::AlreadyInstalled => write!(f, "a debug sink is already installed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InstallError {}
