//! Working-tree change classification and version suggestion.

pub mod log;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::version::VersionBump;

/// A single changed file as reported by the working-tree snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Two-character status code (index + worktree), e.g. `M `, `A `, `??`
    pub status: String,
    /// Path to the file relative to repository root
    pub file: String,
}

impl ChangeRecord {
    /// Creates a record from a status code and a repo-relative path.
    pub fn new(status: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            file: file.into(),
        }
    }
}

/// Conventional commit categories assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    /// New functionality
    Feat,
    /// Bug fixes
    Fix,
    /// Documentation
    Docs,
    /// Styling and formatting
    Style,
    /// Code restructuring
    Refactor,
    /// Tests
    Test,
    /// Maintenance
    Chore,
    /// CI/CD configuration
    Ci,
}

impl CommitType {
    /// All categories, in display order.
    pub const ALL: [Self; 8] = [
        Self::Feat,
        Self::Fix,
        Self::Docs,
        Self::Style,
        Self::Refactor,
        Self::Test,
        Self::Chore,
        Self::Ci,
    ];

    /// Conventional-commit keyword for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Test => "test",
            Self::Chore => "chore",
            Self::Ci => "ci",
        }
    }

    /// Human-readable label used in summaries.
    pub fn label(self) -> &'static str {
        match self {
            Self::Feat => "New features",
            Self::Fix => "Bug fixes",
            Self::Docs => "Documentation",
            Self::Style => "Styling",
            Self::Refactor => "Refactoring",
            Self::Test => "Tests",
            Self::Chore => "Maintenance",
            Self::Ci => "CI/CD",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized commit type keywords.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown commit type '{0}'")]
pub struct ParseCommitTypeError(String);

impl FromStr for CommitType {
    type Err = ParseCommitTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feat" => Ok(Self::Feat),
            "fix" => Ok(Self::Fix),
            "docs" => Ok(Self::Docs),
            "style" => Ok(Self::Style),
            "refactor" => Ok(Self::Refactor),
            "test" => Ok(Self::Test),
            "chore" => Ok(Self::Chore),
            "ci" => Ok(Self::Ci),
            other => Err(ParseCommitTypeError(other.to_string())),
        }
    }
}

/// Priority order used to pick the dominant category. The first category
/// with a non-empty bucket wins.
pub const DOMINANT_PRIORITY: [CommitType; 8] = [
    CommitType::Feat,
    CommitType::Fix,
    CommitType::Refactor,
    CommitType::Test,
    CommitType::Docs,
    CommitType::Style,
    CommitType::Ci,
    CommitType::Chore,
];

/// Classified change records grouped by category.
///
/// Buckets are publicly pushable so callers with richer signals (commit
/// message parsing, content inspection) can pre-populate `feat`/`fix`
/// before asking for a bump suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBuckets {
    /// New functionality
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub feat: Vec<ChangeRecord>,
    /// Bug fixes
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub fix: Vec<ChangeRecord>,
    /// Documentation
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub docs: Vec<ChangeRecord>,
    /// Styling and formatting
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub style: Vec<ChangeRecord>,
    /// Code restructuring
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub refactor: Vec<ChangeRecord>,
    /// Tests
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub test: Vec<ChangeRecord>,
    /// Maintenance
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub chore: Vec<ChangeRecord>,
    /// CI/CD configuration
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub ci: Vec<ChangeRecord>,
}

impl CategoryBuckets {
    /// Creates empty buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the bucket for `category`.
    pub fn push(&mut self, category: CommitType, record: ChangeRecord) {
        self.bucket_mut(category).push(record);
    }

    /// Records classified under `category`.
    pub fn records_for(&self, category: CommitType) -> &[ChangeRecord] {
        match category {
            CommitType::Feat => &self.feat,
            CommitType::Fix => &self.fix,
            CommitType::Docs => &self.docs,
            CommitType::Style => &self.style,
            CommitType::Refactor => &self.refactor,
            CommitType::Test => &self.test,
            CommitType::Chore => &self.chore,
            CommitType::Ci => &self.ci,
        }
    }

    fn bucket_mut(&mut self, category: CommitType) -> &mut Vec<ChangeRecord> {
        match category {
            CommitType::Feat => &mut self.feat,
            CommitType::Fix => &mut self.fix,
            CommitType::Docs => &mut self.docs,
            CommitType::Style => &mut self.style,
            CommitType::Refactor => &mut self.refactor,
            CommitType::Test => &mut self.test,
            CommitType::Chore => &mut self.chore,
            CommitType::Ci => &mut self.ci,
        }
    }

    /// Total number of classified records.
    pub fn total(&self) -> usize {
        CommitType::ALL
            .iter()
            .map(|c| self.records_for(*c).len())
            .sum()
    }

    /// Returns true when no bucket holds a record.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Dominant category: the first non-empty bucket in priority order,
    /// `chore` when everything is empty.
    pub fn dominant(&self) -> CommitType {
        DOMINANT_PRIORITY
            .iter()
            .copied()
            .find(|c| !self.records_for(*c).is_empty())
            .unwrap_or(CommitType::Chore)
    }

    /// Version bump for a given dominant category.
    ///
    /// The bucket contents can escalate the result: a non-empty `feat`
    /// bucket yields minor (and `fix` yields patch) even when the
    /// dominant category is something else. Nothing ever yields major.
    pub fn suggested_bump(&self, dominant: CommitType) -> VersionBump {
        if dominant == CommitType::Feat {
            return VersionBump::Minor;
        }
        if dominant == CommitType::Fix {
            return VersionBump::Patch;
        }
        if !self.feat.is_empty() {
            return VersionBump::Minor;
        }
        if !self.fix.is_empty() {
            return VersionBump::Patch;
        }
        VersionBump::Patch
    }
}

/// File count for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Category the files were classified under
    pub category: CommitType,
    /// Number of files in the bucket
    pub files: usize,
}

/// Human-oriented digest of a classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Dominant category for the whole change set
    pub dominant: CommitType,
    /// File counts for every non-empty category, in display order
    pub counts: Vec<CategoryCount>,
}

impl AnalysisSummary {
    /// Builds the digest from classified buckets.
    pub fn from_buckets(buckets: &CategoryBuckets) -> Self {
        let counts = CommitType::ALL
            .iter()
            .filter(|c| !buckets.records_for(**c).is_empty())
            .map(|c| CategoryCount {
                category: *c,
                files: buckets.records_for(*c).len(),
            })
            .collect();

        Self {
            dominant: buckets.dominant(),
            counts,
        }
    }

    /// Single-line rendering, e.g. `Refactoring: 2 file(s), Documentation: 1 file(s)`.
    pub fn details(&self) -> String {
        let parts: Vec<String> = self
            .counts
            .iter()
            .map(|c| format!("{}: {} file(s)", c.category.label(), c.files))
            .collect();
        parts.join(", ")
    }
}

/// Complete analysis of a working-tree snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeAnalysis {
    /// Whether the snapshot contained any records
    pub has_changes: bool,
    /// The raw records the analysis was computed from
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub changes: Vec<ChangeRecord>,
    /// Records grouped by category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryBuckets>,
    /// Dominant conventional-commit type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_type: Option<CommitType>,
    /// Recommended semantic-version bump
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_bump: Option<VersionBump>,
    /// Proposed conventional commit subject line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_subject: Option<String>,
    /// Per-category digest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<AnalysisSummary>,
    /// Explanation for the no-data outcomes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Working-tree change classifier.
pub struct ChangeClassifier;

impl ChangeClassifier {
    /// Classifies a snapshot of change records into a full analysis.
    ///
    /// Pure over its input: no repository access, no clock, no
    /// randomness. An empty snapshot yields the `has_changes = false`
    /// shape rather than an error.
    pub fn classify(records: &[ChangeRecord]) -> ChangeAnalysis {
        if records.is_empty() {
            return Self::no_data("No changes detected");
        }

        let buckets = Self::categorize(records);
        let dominant = buckets.dominant();
        let bump = buckets.suggested_bump(dominant);
        let summary = AnalysisSummary::from_buckets(&buckets);
        let subject = suggested_subject(dominant, &buckets);

        ChangeAnalysis {
            has_changes: true,
            changes: records.to_vec(),
            categories: Some(buckets),
            suggested_type: Some(dominant),
            suggested_bump: Some(bump),
            suggested_subject: Some(subject),
            summary: Some(summary),
            message: None,
        }
    }

    /// Analysis shape reported when the status provider itself failed.
    pub fn unavailable() -> ChangeAnalysis {
        Self::no_data("Unable to analyze changes")
    }

    fn no_data(message: &str) -> ChangeAnalysis {
        ChangeAnalysis {
            has_changes: false,
            changes: Vec::new(),
            categories: None,
            suggested_type: None,
            suggested_bump: None,
            suggested_subject: None,
            summary: None,
            message: Some(message.to_string()),
        }
    }

    /// Buckets every non-ignored record.
    pub fn categorize(records: &[ChangeRecord]) -> CategoryBuckets {
        let mut buckets = CategoryBuckets::new();
        for record in records {
            if let Some(category) = Self::categorize_record(record) {
                buckets.push(category, record.clone());
            }
        }
        buckets
    }

    /// Category for one record, `None` when the path is ignored.
    pub fn categorize_record(record: &ChangeRecord) -> Option<CommitType> {
        if is_ignored(&record.file) {
            return None;
        }
        Some(categorize_path(&record.status, &record.file))
    }
}

/// Path markers that exclude a record from classification entirely.
const IGNORE_MARKERS: [&str; 5] = ["node_modules/", ".git/", "dist/", "build/", ".log"];

/// Returns true when the path never contributes to a bucket.
fn is_ignored(path: &str) -> bool {
    IGNORE_MARKERS.iter().any(|marker| path.contains(marker)) || path.ends_with(".tmp")
}

/// Assigns a category to a single non-ignored record.
///
/// Rules are ordered and the first match wins. Matching is deliberately
/// case-sensitive: `README.md` is docs via the `.md` suffix, not via the
/// `readme` marker. Total by construction: the final arm catches
/// everything, including source files whose status carries no edit
/// marker (deletes, renames).
fn categorize_path(status: &str, path: &str) -> CommitType {
    if is_test_path(path) {
        return CommitType::Test;
    }
    if is_documentation_path(path) {
        return CommitType::Docs;
    }
    if is_ci_path(path) {
        return CommitType::Ci;
    }
    if is_config_path(path) {
        return if is_repo_tooling_path(path) {
            CommitType::Chore
        } else {
            CommitType::Ci
        };
    }
    if is_style_path(path) {
        return CommitType::Style;
    }
    if is_script_source_path(path) && is_modified_or_added(status) {
        return CommitType::Refactor;
    }
    CommitType::Chore
}

fn is_test_path(path: &str) -> bool {
    path.contains("test") || path.contains("spec") || path.contains("__tests__")
}

fn is_documentation_path(path: &str) -> bool {
    path.contains("doc")
        || path.contains("readme")
        || path.contains("changelog")
        || path.contains(".md")
}

fn is_ci_path(path: &str) -> bool {
    path.contains(".github") || path.contains("ci") || path.contains("workflow")
}

fn is_config_path(path: &str) -> bool {
    path.ends_with(".json")
        || path.ends_with(".yaml")
        || path.ends_with(".yml")
        || path.ends_with(".config.js")
}

fn is_repo_tooling_path(path: &str) -> bool {
    path.contains("package.json") || path.contains("husky") || path.contains("commitlint")
}

fn is_style_path(path: &str) -> bool {
    path.ends_with(".css")
        || path.ends_with(".scss")
        || path.ends_with(".less")
        || path.contains("style")
}

fn is_script_source_path(path: &str) -> bool {
    path.ends_with(".js")
        || path.ends_with(".ts")
        || path.ends_with(".jsx")
        || path.ends_with(".tsx")
}

/// True when the status code carries an edit marker in either column.
fn is_modified_or_added(status: &str) -> bool {
    status.contains('M') || status.contains('A')
}

/// Proposed conventional commit subject for a classified change set.
fn suggested_subject(dominant: CommitType, buckets: &CategoryBuckets) -> String {
    let records = buckets.records_for(dominant);
    let description = match dominant {
        CommitType::Feat => {
            if records.len() == 1 {
                format!("add {}", records[0].file)
            } else {
                format!("add {} new features", records.len())
            }
        }
        CommitType::Fix => "resolve issues".to_string(),
        CommitType::Docs => "update documentation".to_string(),
        CommitType::Style => "improve styling and formatting".to_string(),
        CommitType::Refactor => "improve code structure".to_string(),
        CommitType::Test => "add tests".to_string(),
        CommitType::Chore => "update project files".to_string(),
        CommitType::Ci => "update ci configuration".to_string(),
    };
    format!("{dominant}: {description}")
}
