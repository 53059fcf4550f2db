//! Repoherd — batch synchronizer for local git working copies.
//!
//! # Usage
//!
//! ```text
//! repoherd scan     [--config <path>] [--log-dir <path>]
//! repoherd manifest [--file <path>]   [--log-dir <path>]
//! ```
//!
//! `scan` reads the per-platform scan root from a key=value config file and
//! synchronizes every git repository found directly under it. `manifest`
//! synchronizes an explicit newline-delimited list of repository paths.
//! Either way, each repository gets one pull → auto-commit → push pass and
//! one log line; failures are isolated per repository.

mod commands;
mod execute;
mod logbook;
mod paths;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{manifest::ManifestArgs, scan::ScanArgs};

#[derive(Parser, Debug)]
#[command(
    name = "repoherd",
    version,
    about = "Keep a fleet of local git working copies in sync with their remotes",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan the configured root directory for git repositories and sync each.
    Scan(ScanArgs),

    /// Sync the repositories listed in a manifest file.
    Manifest(ManifestArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Scan(args) => args.run(),
        Commands::Manifest(args) => args.run(),
    };
    if result.is_ok() {
        pause_before_window_closes();
    }
    result
}

/// A double-clicked console window on Windows closes the moment the process
/// exits; hold for a key-press so the final summary stays readable.
#[cfg(windows)]
fn pause_before_window_closes() {
    use std::io::{self, BufRead, Write};
    print!("\npress Enter to exit ... ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}

#[cfg(not(windows))]
fn pause_before_window_closes() {}
