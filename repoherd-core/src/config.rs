//! Configuration resolution for both discovery variants.
//!
//! Variant A reads a small `.env`-style key=value file and selects the scan
//! root keyed by the current OS family. Variant B reads a plain-text
//! manifest, one repository path per line. Both take explicit file paths
//! (`_at` style) so tests never touch real user files.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::platform::OsFamily;

/// Resolve the scan root from a key=value config file (variant A).
///
/// Blank lines and `#` comments are skipped; keys are trimmed and
/// upper-cased before matching; the first line whose key equals the family's
/// path key wins. A missing file, an unreadable file, a family without a
/// path key, and an absent key are four distinct fatal errors.
pub fn scan_root_at(path: &Path, family: OsFamily) -> Result<PathBuf, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::EnvFileMissing {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let key = family
        .path_key()
        .ok_or(ConfigError::UnsupportedPlatform { family })?;

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((k, v)) = line.split_once('=') else {
            continue;
        };
        if k.trim().to_ascii_uppercase() == key {
            return Ok(expand_home(v.trim()));
        }
    }

    Err(ConfigError::KeyMissing {
        key,
        path: path.to_path_buf(),
    })
}

/// Read the manifest of repository paths (variant B).
///
/// Blank lines and `#` comments are dropped; the rest are returned in file
/// order with a leading `~` expanded. A missing manifest and a manifest with
/// zero usable lines are distinct fatal errors.
pub fn manifest_paths_at(path: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::ManifestMissing {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let paths: Vec<PathBuf> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(expand_home)
        .collect();

    if paths.is_empty() {
        return Err(ConfigError::ManifestEmpty {
            path: path.to_path_buf(),
        });
    }
    Ok(paths)
}

/// Expand a leading `~` to the user's home directory.
///
/// Left as-is when no home directory can be determined; the existence check
/// downstream reports the unexpanded path.
fn expand_home(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}
