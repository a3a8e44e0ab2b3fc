//! Project configuration loaded from the repository under analysis.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use semver::Version;
use serde::{Deserialize, Serialize};

/// Relative path of the release-please configuration.
pub const RELEASE_PLEASE_CONFIG: &str = ".github/release-please-config.json";

/// Files a release-please + commitlint toolchain needs in place.
pub const REQUIRED_SETUP_FILES: [&str; 7] = [
    RELEASE_PLEASE_CONFIG,
    ".github/.release-please-manifest.json",
    ".github/workflows/release-please.yml",
    ".github/workflows/publish-npm.yml",
    ".husky/commit-msg",
    ".husky/pre-commit",
    "commitlint.config.js",
];

/// `package.json` fields the toolkit cares about.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PackageManifest {
    /// Package name
    #[serde(default)]
    pub name: String,

    /// Current version string
    #[serde(default)]
    pub version: String,

    /// npm lifecycle scripts
    #[serde(default)]
    pub scripts: HashMap<String, String>,
}

impl PackageManifest {
    /// Loads a manifest from an explicit `package.json` path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read package.json: {path:?}"))?;

        let manifest: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse package.json: {path:?}"))?;

        Ok(manifest)
    }
}

/// Resolved release configuration for a repository.
///
/// Loaded once per command from an explicit root and passed down;
/// nothing below the CLI layer reads the filesystem on its own.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Repository root the configuration was loaded from
    pub root: PathBuf,
    /// Package name from the manifest
    pub package_name: String,
    /// Current version from the manifest
    pub current_version: Version,
    /// npm lifecycle scripts from the manifest
    pub scripts: HashMap<String, String>,
    /// Parsed release-please configuration, when present
    pub release_please: Option<serde_json::Value>,
}

impl ProjectConfig {
    /// Loads the configuration from a repository root.
    ///
    /// A missing or invalid `package.json` is an error; a missing
    /// release-please configuration is not.
    pub fn load(root: &Path) -> Result<Self> {
        let manifest_path = root.join("package.json");
        let manifest = PackageManifest::load(&manifest_path)?;

        let current_version = Version::parse(&manifest.version).with_context(|| {
            format!(
                "Invalid version '{}' in {:?}",
                manifest.version, manifest_path
            )
        })?;

        let release_please = load_release_please(root)?;

        Ok(Self {
            root: root.to_path_buf(),
            package_name: manifest.name,
            current_version,
            scripts: manifest.scripts,
            release_please,
        })
    }

    /// Whether the manifest declares an npm script with this name.
    pub fn has_script(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }

    /// Whether a release-please configuration was found.
    pub fn release_please_configured(&self) -> bool {
        self.release_please.is_some()
    }
}

fn load_release_please(root: &Path) -> Result<Option<serde_json::Value>> {
    let path = root.join(RELEASE_PLEASE_CONFIG);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read release-please config: {path:?}"))?;

    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse release-please config: {path:?}"))?;

    Ok(Some(value))
}

/// Result of one setup check.
#[derive(Debug, Clone, Serialize)]
pub struct SetupCheck {
    /// Path that was checked, relative to the root
    pub path: String,
    /// Whether the file exists
    pub present: bool,
}

/// Whole-toolchain audit for the `verify` and `status` commands.
#[derive(Debug, Clone, Serialize)]
pub struct SetupAudit {
    /// One entry per required file
    pub checks: Vec<SetupCheck>,
    /// Whether the manifest declares a `prepare` script
    pub prepare_script: bool,
    /// True when every check passed
    pub complete: bool,
}

impl SetupAudit {
    /// Audits a repository root for the required release toolchain.
    pub fn run(root: &Path, has_prepare_script: bool) -> Self {
        let checks: Vec<SetupCheck> = REQUIRED_SETUP_FILES
            .iter()
            .map(|rel| SetupCheck {
                path: (*rel).to_string(),
                present: root.join(rel).exists(),
            })
            .collect();

        let complete = checks.iter().all(|c| c.present) && has_prepare_script;

        Self {
            checks,
            prepare_script: has_prepare_script,
            complete,
        }
    }

    fn is_present(&self, path: &str) -> bool {
        self.checks.iter().any(|c| c.path == path && c.present)
    }

    /// Whether both release workflow files exist.
    pub fn workflows_present(&self) -> bool {
        self.is_present(".github/workflows/release-please.yml")
            && self.is_present(".github/workflows/publish-npm.yml")
    }

    /// Whether both husky hooks exist.
    pub fn hooks_present(&self) -> bool {
        self.is_present(".husky/commit-msg") && self.is_present(".husky/pre-commit")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_manifest_load() {
        let temp_dir = tempdir().unwrap();
        write(
            temp_dir.path(),
            "package.json",
            r#"{"name": "my-app", "version": "1.2.3", "scripts": {"prepare": "husky"}}"#,
        );

        let manifest = PackageManifest::load(&temp_dir.path().join("package.json")).unwrap();
        assert_eq!(manifest.name, "my-app");
        assert_eq!(manifest.version, "1.2.3");
        assert_eq!(manifest.scripts.get("prepare").map(String::as_str), Some("husky"));
    }

    #[test]
    fn test_missing_manifest_is_error() {
        let temp_dir = tempdir().unwrap();
        assert!(ProjectConfig::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_invalid_version_is_error() {
        let temp_dir = tempdir().unwrap();
        write(
            temp_dir.path(),
            "package.json",
            r#"{"name": "my-app", "version": "not-a-version"}"#,
        );
        assert!(ProjectConfig::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_without_release_please() {
        let temp_dir = tempdir().unwrap();
        write(
            temp_dir.path(),
            "package.json",
            r#"{"name": "my-app", "version": "0.4.0"}"#,
        );

        let config = ProjectConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.package_name, "my-app");
        assert_eq!(config.current_version, Version::new(0, 4, 0));
        assert!(!config.release_please_configured());
        assert!(!config.has_script("prepare"));
    }

    #[test]
    fn test_config_with_release_please() {
        let temp_dir = tempdir().unwrap();
        write(
            temp_dir.path(),
            "package.json",
            r#"{"name": "my-app", "version": "0.4.0"}"#,
        );
        write(
            temp_dir.path(),
            RELEASE_PLEASE_CONFIG,
            r#"{"release-type": "node"}"#,
        );

        let config = ProjectConfig::load(temp_dir.path()).unwrap();
        assert!(config.release_please_configured());
    }

    #[test]
    fn test_audit_incomplete_when_files_missing() {
        let temp_dir = tempdir().unwrap();
        let audit = SetupAudit::run(temp_dir.path(), false);
        assert!(!audit.complete);
        assert!(audit.checks.iter().all(|c| !c.present));
        assert!(!audit.workflows_present());
        assert!(!audit.hooks_present());
    }

    #[test]
    fn test_audit_complete_with_full_toolchain() {
        let temp_dir = tempdir().unwrap();
        for rel in REQUIRED_SETUP_FILES {
            write(temp_dir.path(), rel, "{}");
        }

        let audit = SetupAudit::run(temp_dir.path(), true);
        assert!(audit.complete);
        assert!(audit.workflows_present());
        assert!(audit.hooks_present());
    }

    #[test]
    fn test_audit_requires_prepare_script() {
        let temp_dir = tempdir().unwrap();
        for rel in REQUIRED_SETUP_FILES {
            write(temp_dir.path(), rel, "{}");
        }

        let audit = SetupAudit::run(temp_dir.path(), false);
        assert!(!audit.complete);
        assert!(!audit.prepare_script);
    }
}
