//! CLI interface for release-scout.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod analyze;
pub mod formatting;
pub mod help;
pub mod next_version;
pub mod status;
pub mod suggest;
pub mod verify;

/// release-scout: Git change analysis and release suggestion toolkit.
#[derive(Parser)]
#[command(name = "release-scout")]
#[command(about = "Git change analysis and release suggestion toolkit", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Classifies working tree changes and suggests a commit type.
    Analyze(analyze::AnalyzeCommand),
    /// Inspects commits since the last release tag and suggests a bump.
    Suggest(suggest::SuggestCommand),
    /// Shows the release toolchain status for the current project.
    Status(status::StatusCommand),
    /// Verifies that the release toolchain is fully configured.
    Verify(verify::VerifyCommand),
    /// Computes the next version for a bump level.
    NextVersion(next_version::NextVersionCommand),
    /// Displays comprehensive help for all commands.
    #[command(name = "help-all")]
    HelpAll(help::HelpCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Analyze(cmd) => cmd.execute(),
            Commands::Suggest(cmd) => cmd.execute(),
            Commands::Status(cmd) => cmd.execute(),
            Commands::Verify(cmd) => cmd.execute(),
            Commands::NextVersion(cmd) => cmd.execute(),
            Commands::HelpAll(cmd) => cmd.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn subcommand_names_are_kebab_case() {
        let app = Cli::command();
        let names: Vec<_> = app.get_subcommands().map(clap::Command::get_name).collect();
        assert!(names.contains(&"analyze"));
        assert!(names.contains(&"suggest"));
        assert!(names.contains(&"status"));
        assert!(names.contains(&"verify"));
        assert!(names.contains(&"next-version"));
        assert!(names.contains(&"help-all"));
    }
}
