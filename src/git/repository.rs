//! Git repository operations

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use git2::{DescribeFormatOptions, DescribeOptions, Repository, Status, StatusOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::ChangeRecord;
use crate::git::{HistoryError, SHORT_HASH_LEN};

/// Git repository wrapper
pub struct GitRepository {
    repo: Repository,
}

/// Working tree status snapshot
#[derive(Debug)]
pub struct WorkingTreeStatus {
    /// Whether the working tree has no changes
    pub clean: bool,
    /// One record per changed file
    pub changes: Vec<ChangeRecord>,
}

/// A commit that is not part of any release yet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreleasedCommit {
    /// Abbreviated commit hash
    pub short_hash: String,
    /// First line of the commit message
    pub summary: String,
    /// Commit date in ISO format with timezone
    pub date: DateTime<FixedOffset>,
}

impl GitRepository {
    /// Open repository at current directory
    pub fn open() -> Result<Self> {
        let repo = Repository::open(".").context("Not in a git repository")?;

        Ok(Self { repo })
    }

    /// Open repository at specified path
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path).context("Failed to open git repository")?;

        Ok(Self { repo })
    }

    /// Get workdir path
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Get the working tree status as classifier-ready change records
    pub fn working_tree_status(&self) -> Result<WorkingTreeStatus> {
        let mut options = StatusOptions::new();
        options.include_untracked(true).recurse_untracked_dirs(true);

        let statuses = self
            .repo
            .statuses(Some(&mut options))
            .context("Failed to get repository status")?;

        let mut changes = Vec::new();

        for entry in statuses.iter() {
            if let Some(path) = entry.path() {
                changes.push(ChangeRecord {
                    status: format_status_flags(entry.status()),
                    file: path.to_string(),
                });
            }
        }

        debug!(files = changes.len(), "collected working tree status");

        let clean = changes.is_empty();

        Ok(WorkingTreeStatus { clean, changes })
    }

    /// Get current branch name
    pub fn current_branch(&self) -> Result<String> {
        let head = self.repo.head().context("Failed to get HEAD reference")?;

        if let Some(name) = head.shorthand() {
            if name != "HEAD" {
                return Ok(name.to_string());
            }
        }

        anyhow::bail!("Repository is in detached HEAD state")
    }

    /// Nearest release tag reachable from HEAD.
    ///
    /// A repository without any tag (or without any commit) reports
    /// `HistoryError::NoReleaseTag` so callers can fall back to a
    /// first-release message instead of failing.
    pub fn last_release_tag(&self) -> Result<String, HistoryError> {
        let mut options = DescribeOptions::new();
        options.describe_tags();

        // A repository with commits but no tags fails describe with a
        // generic code and class Describe; an unborn HEAD uses the codes.
        let describe = self
            .repo
            .describe(&options)
            .map_err(|e| match (e.code(), e.class()) {
                (git2::ErrorCode::NotFound | git2::ErrorCode::UnbornBranch, _)
                | (_, git2::ErrorClass::Describe) => HistoryError::NoReleaseTag,
                _ => HistoryError::Git(e),
            })?;

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);

        let tag = describe.format(Some(&format))?;
        debug!(tag = %tag, "located last release tag");

        Ok(tag)
    }

    /// Commits reachable from HEAD but not from `tag`, newest first.
    /// Merge commits are skipped.
    pub fn commits_since(&self, tag: &str) -> Result<Vec<UnreleasedCommit>, HistoryError> {
        let tag_commit = self.repo.revparse_single(tag)?.peel_to_commit()?;
        let head_commit = self.repo.head()?.peel_to_commit()?;

        let mut walker = self.repo.revwalk()?;
        walker.push(head_commit.id())?;
        walker.hide(tag_commit.id())?;

        let mut commits = Vec::new();

        for oid in walker {
            let commit = self.repo.find_commit(oid?)?;

            if commit.parent_count() > 1 {
                continue;
            }

            commits.push(UnreleasedCommit::from_git_commit(&commit));
        }

        debug!(tag = %tag, commits = commits.len(), "collected unreleased commits");

        Ok(commits)
    }
}

impl UnreleasedCommit {
    fn from_git_commit(commit: &git2::Commit<'_>) -> Self {
        let short_hash = commit
            .id()
            .to_string()
            .chars()
            .take(SHORT_HASH_LEN)
            .collect();

        let summary = commit.summary().unwrap_or("").to_string();

        let when = commit.author().when();
        let date = DateTime::from_timestamp(when.seconds(), 0)
            .map(|utc| match FixedOffset::east_opt(when.offset_minutes() * 60) {
                Some(offset) => utc.with_timezone(&offset),
                None => utc.fixed_offset(),
            })
            .unwrap_or_default();

        Self {
            short_hash,
            summary,
            date,
        }
    }
}

/// Format git status flags into a two-character porcelain-style code
fn format_status_flags(flags: Status) -> String {
    // Untracked files carry no index state at all
    if flags.contains(Status::WT_NEW) {
        return "??".to_string();
    }

    let mut status = String::new();

    if flags.contains(Status::INDEX_NEW) {
        status.push('A');
    } else if flags.contains(Status::INDEX_MODIFIED) {
        status.push('M');
    } else if flags.contains(Status::INDEX_DELETED) {
        status.push('D');
    } else if flags.contains(Status::INDEX_RENAMED) {
        status.push('R');
    } else if flags.contains(Status::INDEX_TYPECHANGE) {
        status.push('T');
    } else {
        status.push(' ');
    }

    if flags.contains(Status::WT_MODIFIED) {
        status.push('M');
    } else if flags.contains(Status::WT_DELETED) {
        status.push('D');
    } else if flags.contains(Status::WT_TYPECHANGE) {
        status.push('T');
    } else if flags.contains(Status::WT_RENAMED) {
        status.push('R');
    } else {
        status.push(' ');
    }

    status
}
