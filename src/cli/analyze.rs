//! Analyze command: classifies working tree changes into commit categories.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::classify::{ChangeAnalysis, ChangeClassifier, ChangeRecord};
use crate::cli::formatting;
use crate::data::ChangeReport;
use crate::git::GitRepository;

/// Analyze command options.
#[derive(Parser)]
pub struct AnalyzeCommand {
    /// Emit the full analysis as YAML instead of the human-readable summary.
    #[arg(long)]
    pub yaml: bool,
}

impl AnalyzeCommand {
    /// Executes the analyze command.
    pub fn execute(self) -> Result<()> {
        // A missing repository or unreadable working tree is reported inside
        // the analysis itself, never as a hard failure.
        let analysis = match working_tree_changes() {
            Ok(changes) => ChangeClassifier::classify(&changes),
            Err(e) => {
                debug!("working tree snapshot unavailable: {e:#}");
                ChangeClassifier::unavailable()
            }
        };

        if self.yaml {
            let report = ChangeReport::new(analysis);
            let yaml_output = report.to_yaml_output()?;
            println!("{yaml_output}");
            return Ok(());
        }

        print_analysis(&analysis);
        Ok(())
    }
}

/// Collects the current working tree changes as classifier records.
fn working_tree_changes() -> Result<Vec<ChangeRecord>> {
    let repo = GitRepository::open()?;
    let status = repo.working_tree_status()?;
    Ok(status.changes)
}

fn print_analysis(analysis: &ChangeAnalysis) {
    if !analysis.has_changes {
        if let Some(message) = &analysis.message {
            println!("{message}");
        }
        return;
    }

    println!("{}", formatting::heading("Change Analysis"));
    for change in &analysis.changes {
        println!(
            "{} {} {}",
            formatting::status_icon(&change.status),
            change.status,
            change.file
        );
    }

    if let Some(summary) = &analysis.summary {
        let details = summary.details();
        if !details.is_empty() {
            println!();
            println!("\u{1f4ca} Summary: {details}");
        }
    }
    if let Some(suggested_type) = analysis.suggested_type {
        println!("\u{1f4dd} Suggested commit type: {suggested_type}");
    }
    if let Some(bump) = analysis.suggested_bump {
        println!(
            "\u{1f4c8} Suggested version bump: {}",
            formatting::bump_label(bump)
        );
    }
    if let Some(subject) = &analysis.suggested_subject {
        println!("\u{1f4ac} Suggested subject: {subject}");
    }
}
