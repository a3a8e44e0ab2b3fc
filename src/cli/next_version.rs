//! Next-version command: computes the version a bump level produces.

use anyhow::{Context, Result};
use clap::Parser;
use semver::Version;

use crate::config::ProjectConfig;
use crate::git::GitRepository;
use crate::version::{next_version, VersionBump};

/// Next-version command options.
#[derive(Parser)]
pub struct NextVersionCommand {
    /// Bump level to apply (major, minor or patch).
    #[arg(value_name = "BUMP")]
    pub bump: String,

    /// Start from this version instead of the package manifest.
    #[arg(long, value_name = "VERSION")]
    pub current: Option<String>,

    /// Mark the result as a pre-release.
    #[arg(long)]
    pub prerelease: bool,
}

impl NextVersionCommand {
    /// Executes the next-version command.
    pub fn execute(self) -> Result<()> {
        let bump: VersionBump = self.bump.parse()?;

        let current = match &self.current {
            Some(raw) => {
                Version::parse(raw).with_context(|| format!("Invalid version '{raw}'"))?
            }
            None => {
                let repo = GitRepository::open().context(
                    "Failed to open git repository. Make sure you're in a git repository.",
                )?;
                let root = repo
                    .workdir()
                    .context("Repository has no working directory")?
                    .to_path_buf();
                ProjectConfig::load(&root)?.current_version
            }
        };

        let next = next_version(&current, bump, self.prerelease);
        println!("{next}");
        Ok(())
    }
}
