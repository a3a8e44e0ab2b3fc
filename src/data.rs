//! Report structures and serialization.

pub mod yaml;

pub use yaml::to_yaml;

use serde::{Deserialize, Serialize};

use crate::classify::log::LogSuggestion;
use crate::classify::ChangeAnalysis;
use crate::git::UnreleasedCommit;

/// Version information for tools and environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Version of the release-scout tool.
    pub release_scout: String,
}

impl VersionInfo {
    /// Version stamp for the running binary.
    pub fn current() -> Self {
        Self {
            release_scout: crate::VERSION.to_string(),
        }
    }
}

/// Working-tree analysis report for the `analyze` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeReport {
    /// Version information for the release-scout tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<VersionInfo>,
    /// Classification of the working tree.
    pub analysis: ChangeAnalysis,
}

impl ChangeReport {
    /// Wraps an analysis with the current version stamp.
    pub fn new(analysis: ChangeAnalysis) -> Self {
        Self {
            versions: Some(VersionInfo::current()),
            analysis,
        }
    }

    /// Serializes this report to YAML.
    pub fn to_yaml_output(&self) -> anyhow::Result<String> {
        yaml::to_yaml(self)
    }
}

/// Unreleased-history report for the `suggest` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreleasedReport {
    /// Version information for the release-scout tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<VersionInfo>,
    /// Most recent release tag reachable from HEAD, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_tag: Option<String>,
    /// Commits since the last release tag, newest first.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub commits: Vec<UnreleasedCommit>,
    /// Bump recommendation derived from the commit subjects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<LogSuggestion>,
    /// Explanation when no recommendation could be made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl UnreleasedReport {
    /// Builds the report for a tag and the commits found after it.
    pub fn from_history(last_tag: String, commits: Vec<UnreleasedCommit>) -> Self {
        if commits.is_empty() {
            return Self {
                versions: Some(VersionInfo::current()),
                last_tag: Some(last_tag.clone()),
                commits: Vec::new(),
                suggestion: None,
                message: Some(format!("No unreleased commits since {last_tag}")),
            };
        }

        let subjects: Vec<&str> = commits.iter().map(|c| c.summary.as_str()).collect();
        let suggestion = LogSuggestion::from_subjects(&subjects);

        Self {
            versions: Some(VersionInfo::current()),
            last_tag: Some(last_tag),
            commits,
            suggestion: Some(suggestion),
            message: None,
        }
    }

    /// Report shape for repositories without any release tag.
    pub fn no_release_tag() -> Self {
        Self {
            versions: Some(VersionInfo::current()),
            last_tag: None,
            commits: Vec::new(),
            suggestion: None,
            message: Some("No tags found. This might be the first release".to_string()),
        }
    }

    /// Serializes this report to YAML.
    pub fn to_yaml_output(&self) -> anyhow::Result<String> {
        yaml::to_yaml(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::classify::{ChangeClassifier, ChangeRecord};
    use crate::version::VersionBump;
    use chrono::{FixedOffset, TimeZone};

    fn commit(summary: &str) -> UnreleasedCommit {
        UnreleasedCommit {
            short_hash: "abcd1234".to_string(),
            summary: summary.to_string(),
            date: FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
                .unwrap(),
        }
    }

    // ── ChangeReport ───────────────────────────────────────────────

    #[test]
    fn change_report_carries_version_stamp() {
        let analysis = ChangeClassifier::classify(&[ChangeRecord::new("M ", "src/App.tsx")]);
        let report = ChangeReport::new(analysis);

        assert_eq!(
            report.versions.as_ref().map(|v| v.release_scout.as_str()),
            Some(crate::VERSION)
        );
    }

    #[test]
    fn change_report_yaml_includes_buckets() {
        let analysis = ChangeClassifier::classify(&[
            ChangeRecord::new("M ", "src/App.tsx"),
            ChangeRecord::new("A ", "README.md"),
        ]);
        let yaml = ChangeReport::new(analysis).to_yaml_output().unwrap();

        assert!(yaml.starts_with("---"));
        assert!(yaml.contains("has_changes: true"));
        assert!(yaml.contains("suggested_type: refactor"));
        assert!(yaml.contains("suggested_bump: patch"));
        assert!(yaml.contains("src/App.tsx"));
    }

    // ── UnreleasedReport ───────────────────────────────────────────

    #[test]
    fn history_report_suggests_from_subjects() {
        let report = UnreleasedReport::from_history(
            "v1.2.0".to_string(),
            vec![commit("feat: add export"), commit("chore: tidy")],
        );

        assert_eq!(report.last_tag.as_deref(), Some("v1.2.0"));
        let suggestion = report.suggestion.unwrap();
        assert_eq!(suggestion.bump, VersionBump::Minor);
        assert!(report.message.is_none());
    }

    #[test]
    fn history_report_with_no_commits_explains_itself() {
        let report = UnreleasedReport::from_history("v1.2.0".to_string(), Vec::new());

        assert!(report.suggestion.is_none());
        assert_eq!(
            report.message.as_deref(),
            Some("No unreleased commits since v1.2.0")
        );
    }

    #[test]
    fn no_tag_report_has_no_suggestion() {
        let report = UnreleasedReport::no_release_tag();

        assert!(report.last_tag.is_none());
        assert!(report.suggestion.is_none());
        assert!(report.message.is_some());
    }

    #[test]
    fn unreleased_yaml_includes_commits() {
        let report =
            UnreleasedReport::from_history("v0.9.0".to_string(), vec![commit("fix: redirect")]);
        let yaml = report.to_yaml_output().unwrap();

        assert!(yaml.contains("last_tag: v0.9.0"));
        assert!(yaml.contains("abcd1234"));
        assert!(yaml.contains("bump: patch"));
    }
}
