//! Per-repository synchronization state machine.
//!
//! Executed strictly in order with early exit on failure:
//!
//! 1. `git pull --rebase` — integrate remote changes, replaying local
//!    commits on top. Nothing local has been mutated yet, so a failure
//!    needs no rollback.
//! 2. `git status --porcelain` — non-empty output means uncommitted
//!    changes: `git add -A`, then commit with a generated
//!    `auto-sync YYYY-MM-DD_HHMM` message.
//! 3. `git push` — always attempted once pull (and any commit) succeeded,
//!    so the push carries the latest local state.
//!
//! At most one pull, one commit, one push per invocation. No retries.

use std::path::Path;

use chrono::{DateTime, Local};

use repoherd_core::discovery::RepoRef;

use crate::git::{FailureDetail, GitOutput, GitRunner};

/// Outcome of processing one repository. Exactly one per repository per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Pull succeeded, working copy was clean, push succeeded.
    PulledCleanAndPushed,
    /// Local changes were auto-committed and pushed.
    CommittedAndPushed,
    PullFailed(FailureDetail),
    CommitFailed(FailureDetail),
    PushFailed(FailureDetail),
    /// The path exists but holds no `.git` directory (manifest-mode guard).
    SkippedNotARepository,
    /// The path does not exist.
    SkippedPathMissing,
}

/// Synchronize one repository, stamping any auto-sync commit with the
/// current local time.
pub fn sync_repo(git: &dyn GitRunner, repo: &RepoRef) -> SyncOutcome {
    sync_repo_at(git, repo, Local::now())
}

/// [`sync_repo`] with an explicit clock so tests can pin the commit message.
pub fn sync_repo_at(git: &dyn GitRunner, repo: &RepoRef, now: DateTime<Local>) -> SyncOutcome {
    if !repo.path.exists() {
        return SyncOutcome::SkippedPathMissing;
    }
    if !repo.path.join(".git").is_dir() {
        return SyncOutcome::SkippedNotARepository;
    }

    if let Step::Failed(detail) = run(git, &repo.path, &["pull", "--rebase"]) {
        return SyncOutcome::PullFailed(detail);
    }

    let status = match run(git, &repo.path, &["status", "--porcelain"]) {
        Step::Ok(out) => out,
        // Detection belongs to the commit stage: if we cannot tell whether
        // the tree is dirty, no commit (and no push) is attempted.
        Step::Failed(detail) => return SyncOutcome::CommitFailed(detail),
    };

    let mut committed = false;
    if !status.stdout.trim().is_empty() {
        if let Step::Failed(detail) = run(git, &repo.path, &["add", "-A"]) {
            return SyncOutcome::CommitFailed(detail);
        }
        let message = format!("auto-sync {}", now.format("%Y-%m-%d_%H%M"));
        if let Step::Failed(detail) = run(git, &repo.path, &["commit", "-m", &message]) {
            return SyncOutcome::CommitFailed(detail);
        }
        committed = true;
    }

    if let Step::Failed(detail) = run(git, &repo.path, &["push"]) {
        return SyncOutcome::PushFailed(detail);
    }

    if committed {
        SyncOutcome::CommittedAndPushed
    } else {
        SyncOutcome::PulledCleanAndPushed
    }
}

enum Step {
    Ok(GitOutput),
    Failed(FailureDetail),
}

fn run(git: &dyn GitRunner, repo: &Path, args: &[&str]) -> Step {
    match git.run(repo, args) {
        Ok(out) if out.success => Step::Ok(out),
        Ok(out) => Step::Failed(FailureDetail::from_stderr(&out.stderr)),
        Err(err) => Step::Failed(FailureDetail::from_io(&err)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
