//! Operating-system family detection.
//!
//! The scan config keys its root path by OS family. `Unknown` is a real
//! variant, not a fallback: a platform without a path key fails resolution
//! with an explicit diagnostic.

use std::fmt;

/// The OS families the scan configuration distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    MacOs,
    Windows,
    Unknown,
}

impl OsFamily {
    /// Family of the platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            OsFamily::MacOs
        } else if cfg!(windows) {
            OsFamily::Windows
        } else {
            OsFamily::Unknown
        }
    }

    /// The config key holding the scan root for this family.
    pub fn path_key(&self) -> Option<&'static str> {
        match self {
            OsFamily::MacOs => Some("MACOS_PATH"),
            OsFamily::Windows => Some("WINDOWS_PATH"),
            OsFamily::Unknown => None,
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsFamily::MacOs => write!(f, "macos"),
            OsFamily::Windows => write!(f, "windows"),
            OsFamily::Unknown => write!(f, "unknown"),
        }
    }
}
