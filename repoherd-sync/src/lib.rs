//! # repoherd-sync
//!
//! The per-repository git synchronizer.
//!
//! Call [`sync_repo`] with a [`GitRunner`] and a discovered repository to
//! run the pull → detect → commit → push sequence. Every failure becomes a
//! [`SyncOutcome`] variant; nothing in this crate aborts the surrounding
//! run, which is how per-repository isolation is guaranteed.

pub mod engine;
pub mod git;

pub use engine::{sync_repo, SyncOutcome};
pub use git::{FailureDetail, GitOutput, GitRunner, SystemGit};
