//! Default file locations, resolved next to the running executable.
//!
//! Matches the deploy-as-a-folder model: drop the binary, its `.env` or
//! `repos.txt`, and a `logs/` directory side by side. Every location can be
//! overridden with a CLI flag, which is also what the tests use.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const ENV_FILE: &str = ".env";
pub const MANIFEST_FILE: &str = "repos.txt";
pub const LOGS_DIR: &str = "logs";

fn exe_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("could not locate the running executable")?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

pub fn config_file(overridden: Option<PathBuf>) -> Result<PathBuf> {
    match overridden {
        Some(path) => Ok(path),
        None => Ok(exe_dir()?.join(ENV_FILE)),
    }
}

pub fn manifest_file(overridden: Option<PathBuf>) -> Result<PathBuf> {
    match overridden {
        Some(path) => Ok(path),
        None => Ok(exe_dir()?.join(MANIFEST_FILE)),
    }
}

pub fn log_dir(overridden: Option<PathBuf>) -> Result<PathBuf> {
    match overridden {
        Some(path) => Ok(path),
        None => Ok(exe_dir()?.join(LOGS_DIR)),
    }
}
