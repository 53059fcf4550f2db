//! Error types for repoherd-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::platform::OsFamily;

/// Fatal configuration failures. Any of these aborts the whole run before a
/// single repository is touched.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The key=value config file was not found.
    #[error("config file not found: {path}")]
    EnvFileMissing { path: PathBuf },

    /// The config or manifest file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The current platform has no designated path key.
    #[error("unsupported platform '{family}': no scan path key defined")]
    UnsupportedPlatform { family: OsFamily },

    /// The config file parsed fine but the key for this platform is absent.
    #[error("{key} not found in {path} for this platform")]
    KeyMissing { key: &'static str, path: PathBuf },

    /// The manifest file was not found.
    #[error("manifest not found: {path}")]
    ManifestMissing { path: PathBuf },

    /// The manifest exists but every line was blank or a comment.
    #[error("manifest {path} lists no repository paths")]
    ManifestEmpty { path: PathBuf },
}

/// Failures while enumerating the scan root.
#[derive(Debug, Error)]
pub enum DiscoverError {
    /// The configured scan root does not exist.
    #[error("scan root does not exist: {path}")]
    RootMissing { path: PathBuf },

    /// Access was denied while enumerating the scan root.
    #[error("permission denied while scanning {path}")]
    PermissionDenied { path: PathBuf },

    /// Any other I/O failure, with the path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
