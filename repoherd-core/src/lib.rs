//! # repoherd-core
//!
//! Configuration resolution, platform-family detection, and repository
//! discovery for the repoherd batch synchronizer.
//!
//! Two discovery variants exist: scanning a configured root directory for
//! git working copies ([`discovery::scan_repos`]) and reading an explicit
//! manifest of repository paths ([`config::manifest_paths_at`]). Both are
//! resolved once at startup and passed into the run loop as plain values.

pub mod config;
pub mod discovery;
pub mod error;
pub mod platform;

pub use error::{ConfigError, DiscoverError};
