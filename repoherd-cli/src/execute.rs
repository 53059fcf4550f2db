//! Sequential run loop shared by both discovery variants.
//!
//! One synchronizer invocation per repository, in discovery order, one
//! primary log line per outcome. Per-repository failures never stop the
//! loop; the only cross-iteration state is the processed count used by the
//! final summary.

use repoherd_core::discovery::RepoRef;
use repoherd_sync::{engine, FailureDetail, GitRunner, SyncOutcome};

use crate::logbook::Logbook;

/// Synchronize each repository exactly once. Returns the number that
/// reached the synchronizer; skipped candidates are logged but not counted.
pub fn run(git: &dyn GitRunner, repos: &[RepoRef], log: &Logbook) -> usize {
    let mut processed = 0;
    for repo in repos {
        let name = repo.name();
        let outcome = engine::sync_repo(git, repo);
        if !matches!(
            &outcome,
            SyncOutcome::SkippedNotARepository | SyncOutcome::SkippedPathMissing
        ) {
            processed += 1;
        }
        match outcome {
            SyncOutcome::PulledCleanAndPushed => {
                log.success(&format!("- {name} synced, no local changes"));
            }
            SyncOutcome::CommittedAndPushed => {
                log.success(&format!("- {name} committed and pushed"));
            }
            SyncOutcome::PullFailed(detail) => fail(log, &name, "pull failed", detail),
            SyncOutcome::CommitFailed(detail) => fail(log, &name, "commit failed", detail),
            SyncOutcome::PushFailed(detail) => fail(log, &name, "push failed", detail),
            SyncOutcome::SkippedNotARepository => {
                log.failure(&format!("- {name} skipped: not a git repository"));
            }
            SyncOutcome::SkippedPathMissing => {
                log.failure(&format!("- {name} skipped: path not found"));
            }
        }
    }
    processed
}

fn fail(log: &Logbook, name: &str, stage: &str, detail: FailureDetail) {
    log.failure(&format!("- {name} {stage}"));
    let mut lines = vec![detail.summary];
    lines.extend(detail.rest);
    log.detail(&lines);
}

/// Final one-line summary for the whole run.
pub fn summarize(log: &Logbook, processed: usize) {
    if processed == 0 {
        log.failure("no git repositories found");
    } else {
        log.success(&format!("done, {processed} repositories processed"));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
