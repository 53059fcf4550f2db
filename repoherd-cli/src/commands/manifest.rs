//! `repoherd manifest` — synchronize the repositories listed in a manifest
//! file, one path per line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use repoherd_core::{config, discovery};
use repoherd_sync::SystemGit;

use crate::logbook::Logbook;
use crate::{execute, paths};

/// Arguments for `repoherd manifest`.
#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Manifest of repository paths (default: repos.txt next to the binary).
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Directory for day-stamped log files (default: logs/ next to the binary).
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl ManifestArgs {
    pub fn run(self) -> Result<()> {
        let log_dir = paths::log_dir(self.log_dir)?;
        let log = Logbook::new(&log_dir)
            .with_context(|| format!("could not create log directory {}", log_dir.display()))?;

        let manifest_path = paths::manifest_file(self.file)?;
        let listed = match config::manifest_paths_at(&manifest_path) {
            Ok(paths) => paths,
            Err(err) => {
                log.failure(&err.to_string());
                return Err(err).context("manifest resolution failed");
            }
        };

        // Missing paths are warnings, one line each; the run continues.
        let (found, missing) = discovery::partition_candidates(listed);
        for path in &missing {
            log.failure(&format!("- {} skipped: path not found", path.display()));
        }

        let processed = execute::run(&SystemGit, &found, &log);
        execute::summarize(&log, processed);
        Ok(())
    }
}
