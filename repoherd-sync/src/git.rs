//! Git process runner.
//!
//! All git interaction goes through the [`GitRunner`] trait so the engine
//! can be exercised against a scripted fake. The exit status is the
//! authoritative success signal; stderr text is only ever display detail,
//! extracted in one place ([`FailureDetail::from_stderr`]).

use std::io;
use std::path::Path;
use std::process::Command;

/// Captured result of one git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs git subcommands inside a repository working directory.
pub trait GitRunner {
    fn run(&self, repo: &Path, args: &[&str]) -> io::Result<GitOutput>;
}

/// The real runner: spawns the `git` binary found on `PATH`, blocking until
/// it exits. No timeout — a hung git process hangs the run.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemGit;

impl GitRunner for SystemGit {
    fn run(&self, repo: &Path, args: &[&str]) -> io::Result<GitOutput> {
        tracing::debug!("git {} in {}", args.join(" "), repo.display());
        let output = Command::new("git").args(args).current_dir(repo).output()?;
        Ok(GitOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// First-line / continuation-lines split of a git diagnostic stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureDetail {
    /// First non-empty trimmed line, or a generic marker when the stream
    /// was empty.
    pub summary: String,
    /// Remaining non-empty lines, in order.
    pub rest: Vec<String>,
}

impl FailureDetail {
    pub fn from_stderr(stderr: &str) -> Self {
        let mut lines = stderr
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned);
        match lines.next() {
            Some(summary) => Self {
                summary,
                rest: lines.collect(),
            },
            None => Self {
                summary: "no diagnostic output".to_owned(),
                rest: Vec::new(),
            },
        }
    }

    /// Spawn failures (git missing from PATH, etc.) become display detail
    /// the same way a non-zero exit does.
    pub fn from_io(err: &io::Error) -> Self {
        Self {
            summary: format!("failed to run git: {err}"),
            rest: Vec::new(),
        }
    }
}
