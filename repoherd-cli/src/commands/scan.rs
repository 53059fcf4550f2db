//! `repoherd scan` — discover repositories under the configured scan root
//! and synchronize each one.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use repoherd_core::{config, discovery, platform::OsFamily};
use repoherd_sync::SystemGit;

use crate::logbook::Logbook;
use crate::{execute, paths};

/// Arguments for `repoherd scan`.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Key=value config file holding the per-platform scan root
    /// (default: .env next to the binary).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for day-stamped log files (default: logs/ next to the binary).
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl ScanArgs {
    pub fn run(self) -> Result<()> {
        let log_dir = paths::log_dir(self.log_dir)?;
        let log = Logbook::new(&log_dir)
            .with_context(|| format!("could not create log directory {}", log_dir.display()))?;

        let config_path = paths::config_file(self.config)?;
        let family = OsFamily::current();
        let root = match config::scan_root_at(&config_path, family) {
            Ok(root) => root,
            Err(err) => {
                log.failure(&err.to_string());
                return Err(err).context("configuration resolution failed");
            }
        };
        log.info(&format!("loaded {family} scan root: {}", root.display()));

        let scan = match discovery::scan_repos(&root) {
            Ok(scan) => scan,
            Err(err) => {
                log.failure(&err.to_string());
                return Err(err).context("scan root is unusable");
            }
        };

        let processed = execute::run(&SystemGit, &scan.repos, &log);
        if let Some(err) = scan.interrupted {
            log.failure(&err.to_string());
        }
        execute::summarize(&log, processed);
        Ok(())
    }
}
