//! Status command: shows the release toolchain state for the project.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::cli::formatting;
use crate::config::{ProjectConfig, SetupAudit};
use crate::git::GitRepository;

/// Status command options.
#[derive(Parser)]
pub struct StatusCommand {
    /// Also dump the resolved project configuration as JSON.
    #[arg(long)]
    pub verbose: bool,
}

impl StatusCommand {
    /// Executes the status command.
    pub fn execute(self) -> Result<()> {
        // Preflight check: validate the git repository before any processing
        crate::git::check_git_repository()?;

        let repo = GitRepository::open()
            .context("Failed to open git repository. Make sure you're in a git repository.")?;
        let root = repo
            .workdir()
            .context("Repository has no working directory")?
            .to_path_buf();

        let config = ProjectConfig::load(&root)?;
        let audit = SetupAudit::run(&root, config.has_script("prepare"));

        println!("{}", formatting::heading("Release Status"));
        println!("\u{1f4e6} Package: {}", config.package_name);
        println!("\u{1f3f7}\u{fe0f}  Current Version: {}", config.current_version);

        if config.release_please_configured() {
            println!("\u{2705} Release-please: Configured");
        } else {
            println!("\u{274c} Release-please: Not configured");
        }

        for check in audit
            .checks
            .iter()
            .filter(|c| c.path.contains("workflows/") || c.path.contains(".husky/"))
        {
            println!("{}", formatting::check_line(&check.path, check.present));
        }

        match repo.current_branch() {
            Ok(branch) => println!("\u{1f33f} Branch: {branch}"),
            Err(e) => {
                debug!("current branch unavailable: {e:#}");
                println!("\u{1f33f} Branch: (detached HEAD)");
            }
        }

        if self.verbose {
            let details = serde_json::json!({
                "package_name": config.package_name,
                "current_version": config.current_version,
                "scripts": config.scripts,
                "release_please": config.release_please,
            });
            println!("\n\u{1f50d} Detailed configuration:");
            println!("{}", serde_json::to_string_pretty(&details)?);
        }

        match repo.working_tree_status() {
            Ok(status) if status.clean => println!("\n\u{2705} No uncommitted changes"),
            Ok(status) => {
                println!(
                    "\n\u{26a0}\u{fe0f}  Uncommitted changes: {}",
                    formatting::file_count(status.changes.len())
                );
                for change in &status.changes {
                    println!("  {} {}", change.status, change.file);
                }
            }
            Err(e) => {
                debug!("working tree status unavailable: {e:#}");
                println!("\n\u{274c} Unable to check git status");
            }
        }

        Ok(())
    }
}
