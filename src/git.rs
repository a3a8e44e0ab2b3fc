//! Git operations and repository access.

pub mod repository;

pub use repository::{GitRepository, UnreleasedCommit, WorkingTreeStatus};

use anyhow::{Context, Result};
use thiserror::Error;

/// Number of hex characters to show in abbreviated commit hashes.
pub const SHORT_HASH_LEN: usize = 8;

/// Validates that the current directory is inside a git repository.
///
/// This is a lightweight check that opens the repository without
/// loading any commit data.
pub fn check_git_repository() -> Result<()> {
    GitRepository::open().context(
        "Not in a git repository. Please run this command from within a git repository.",
    )?;
    Ok(())
}

/// History lookups that can fail for expected, recoverable reasons.
#[derive(Error, Debug)]
pub enum HistoryError {
    /// No release tag reachable from HEAD.
    #[error("No release tag found in this repository")]
    NoReleaseTag,

    /// Any other repository failure.
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),
}
