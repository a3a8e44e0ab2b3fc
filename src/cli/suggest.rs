//! Suggest command: recommends a version bump from unreleased commits.

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::formatting;
use crate::data::UnreleasedReport;
use crate::git::{GitRepository, HistoryError};

/// Suggest command options.
#[derive(Parser)]
pub struct SuggestCommand {
    /// Emit the full report as YAML instead of the human-readable summary.
    #[arg(long)]
    pub yaml: bool,
}

impl SuggestCommand {
    /// Executes the suggest command.
    pub fn execute(self) -> Result<()> {
        // Preflight check: validate the git repository before any processing
        crate::git::check_git_repository()?;

        let repo = GitRepository::open()
            .context("Failed to open git repository. Make sure you're in a git repository.")?;

        let report = match repo.last_release_tag() {
            Ok(tag) => {
                let commits = repo
                    .commits_since(&tag)
                    .with_context(|| format!("Failed to collect commits since {tag}"))?;
                UnreleasedReport::from_history(tag, commits)
            }
            Err(HistoryError::NoReleaseTag) => UnreleasedReport::no_release_tag(),
            Err(e) => return Err(e).context("Failed to locate the last release tag"),
        };

        if self.yaml {
            let yaml_output = report.to_yaml_output()?;
            println!("{yaml_output}");
            return Ok(());
        }

        print_report(&report);
        Ok(())
    }
}

fn print_report(report: &UnreleasedReport) {
    let Some(last_tag) = &report.last_tag else {
        if let Some(message) = &report.message {
            println!("{message}");
        }
        return;
    };

    if report.commits.is_empty() {
        if let Some(message) = &report.message {
            println!("{message}");
        }
        return;
    }

    println!(
        "{}",
        formatting::heading(&format!("Commits since {last_tag}"))
    );
    for commit in &report.commits {
        println!("{} {}", commit.short_hash, commit.summary);
    }

    if let Some(suggestion) = &report.suggestion {
        let counts = &suggestion.counts;
        println!();
        println!(
            "\u{1f4cb} Markers: {} feat, {} fix, {} docs, {} chore",
            counts.feat, counts.fix, counts.docs, counts.chore
        );
        println!(
            "\u{1f4c8} Recommended bump: {} ({})",
            formatting::bump_label(suggestion.bump),
            suggestion.rationale
        );
        if let Some(note) = &suggestion.note {
            println!("\u{1f4a1} {note}");
        }
    }
}
