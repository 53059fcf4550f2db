//! Repository discovery and filtering.
//!
//! Variant A enumerates the immediate children of the configured scan root
//! and keeps those that look like git working copies. Variant B takes the
//! manifest paths literally and only partitions them by existence; the
//! synchronizer guards against non-repository paths itself.

use std::path::{Path, PathBuf};

use crate::error::DiscoverError;

/// A filesystem path believed to designate a git working copy.
///
/// Created during discovery, consumed exactly once by the synchronizer,
/// discarded after the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub path: PathBuf,
}

impl RepoRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Display name: the last path segment.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Result of enumerating the scan root.
#[derive(Debug)]
pub struct Scan {
    /// Qualifying repositories, name-sorted for a deterministic run order.
    pub repos: Vec<RepoRef>,
    /// Set when enumeration stopped early (e.g. permission denied).
    /// Repositories collected before the stop are still in `repos`.
    pub interrupted: Option<DiscoverError>,
}

/// Enumerate immediate children of `base` that qualify as git working copies.
///
/// A child qualifies if it is a directory, its name does not start with `.`,
/// and it contains a `.git` directory. Non-qualifying children are skipped
/// without comment. A missing or unopenable `base` is a fatal error; an
/// error partway through enumeration stops the scan but keeps what was
/// already found.
pub fn scan_repos(base: &Path) -> Result<Scan, DiscoverError> {
    if !base.exists() {
        return Err(DiscoverError::RootMissing {
            path: base.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(base).map_err(|e| read_err(base, e))?;

    let mut repos = Vec::new();
    let mut interrupted = None;
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                interrupted = Some(read_err(base, e));
                break;
            }
        };
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        if path.is_dir() && path.join(".git").is_dir() {
            repos.push(RepoRef::new(path));
        }
    }

    repos.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(Scan { repos, interrupted })
}

/// Partition manifest candidates into existing paths and missing ones.
///
/// Relative entries are anchored at the current working directory so the
/// log always shows one unambiguous path per repository. Missing paths are
/// reported by the caller (one warning per path) and skipped; they never
/// abort the run.
pub fn partition_candidates(paths: Vec<PathBuf>) -> (Vec<RepoRef>, Vec<PathBuf>) {
    let mut found = Vec::new();
    let mut missing = Vec::new();
    for path in paths {
        let path = if path.is_absolute() {
            path
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(&path))
                .unwrap_or(path)
        };
        if path.exists() {
            found.push(RepoRef::new(path));
        } else {
            missing.push(path);
        }
    }
    (found, missing)
}

fn read_err(path: &Path, source: std::io::Error) -> DiscoverError {
    if source.kind() == std::io::ErrorKind::PermissionDenied {
        DiscoverError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        DiscoverError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
