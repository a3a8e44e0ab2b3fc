//! Verify command: audits the release toolchain configuration.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;

use crate::cli::formatting;
use crate::config::{ProjectConfig, SetupAudit};
use crate::git::GitRepository;

/// Verify command options.
#[derive(Parser)]
pub struct VerifyCommand {}

impl VerifyCommand {
    /// Executes the verify command.
    ///
    /// Exits with an error when any required piece of the toolchain is
    /// missing, so scripts can gate on the result.
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

        println!("{}", formatting::heading("Verifying Setup"));

        for check in &audit.checks {
            println!("{}", formatting::check_line(&check.path, check.present));
        }

        if audit.prepare_script {
            println!("\u{2705} prepare script in package.json");
        } else {
            println!("\u{274c} prepare script missing from package.json");
        }

        let mut all_good = audit.complete;

        // Uncommitted changes only warn; a failing status check fails the audit.
        match repo.working_tree_status() {
            Ok(status) if status.clean => println!("\u{2705} No uncommitted changes"),
            Ok(_) => println!("\u{26a0}\u{fe0f}  Uncommitted changes detected"),
            Err(e) => {
                debug!("working tree status unavailable: {e:#}");
                println!("\u{274c} Git status check failed");
                all_good = false;
            }
        }

        if !all_good {
            bail!("Some issues found. Please fix them before proceeding.");
        }

        println!("\n\u{2705} All checks passed!");
        Ok(())
    }
}
