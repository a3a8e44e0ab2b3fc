//! Conventional-commit marker counting over unreleased history.

use serde::{Deserialize, Serialize};

use crate::version::VersionBump;

/// Counts of conventional-commit markers found in commit subjects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConventionalCounts {
    /// Subjects containing `feat:`
    pub feat: usize,
    /// Subjects containing `fix:`
    pub fix: usize,
    /// Subjects containing `docs:`
    pub docs: usize,
    /// Subjects containing `chore:`
    pub chore: usize,
}

impl ConventionalCounts {
    /// Tallies marker occurrences across commit subject lines.
    ///
    /// Markers are literal substrings matched anywhere in the line: a
    /// subject can increment several counters at once, and scoped forms
    /// like `feat(auth):` do not count at all.
    pub fn tally<S: AsRef<str>>(subjects: &[S]) -> Self {
        let mut counts = Self::default();
        for subject in subjects {
            let line = subject.as_ref();
            if line.contains("feat:") {
                counts.feat += 1;
            }
            if line.contains("fix:") {
                counts.fix += 1;
            }
            if line.contains("docs:") {
                counts.docs += 1;
            }
            if line.contains("chore:") {
                counts.chore += 1;
            }
        }
        counts
    }

    /// Returns true when no release-relevant marker was found.
    pub fn maintenance_only(&self) -> bool {
        self.feat == 0 && self.fix == 0
    }
}

/// Version-bump recommendation derived from unreleased commit subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSuggestion {
    /// Recommended bump
    pub bump: VersionBump,
    /// Why the bump was chosen
    pub rationale: String,
    /// Marker counts behind the recommendation
    pub counts: ConventionalCounts,
    /// Set when only documentation or maintenance markers were found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl LogSuggestion {
    /// Derives a recommendation from commit subject lines.
    pub fn from_subjects<S: AsRef<str>>(subjects: &[S]) -> Self {
        Self::from_counts(ConventionalCounts::tally(subjects))
    }

    /// Derives a recommendation from pre-computed counts. Features win
    /// over fixes; anything else is a patch.
    pub fn from_counts(counts: ConventionalCounts) -> Self {
        let (bump, rationale) = if counts.feat > 0 {
            (
                VersionBump::Minor,
                format!("{} new feature(s) detected", counts.feat),
            )
        } else if counts.fix > 0 {
            (
                VersionBump::Patch,
                format!("{} bug fix(es) detected", counts.fix),
            )
        } else {
            (
                VersionBump::Patch,
                "documentation or maintenance changes only".to_string(),
            )
        };

        let note = (counts.maintenance_only() && counts.docs + counts.chore > 0).then(|| {
            "consider a patch release to ship documentation and maintenance changes".to_string()
        });

        Self {
            bump,
            rationale,
            counts,
            note,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── tally ──────────────────────────────────────────────────────

    #[test]
    fn tally_counts_each_marker() {
        let subjects = vec![
            "feat: add login page".to_string(),
            "fix: correct redirect loop".to_string(),
            "chore: bump dependencies".to_string(),
        ];
        let counts = ConventionalCounts::tally(&subjects);
        assert_eq!(counts.feat, 1);
        assert_eq!(counts.fix, 1);
        assert_eq!(counts.docs, 0);
        assert_eq!(counts.chore, 1);
    }

    #[test]
    fn tally_ignores_scoped_markers() {
        let subjects = ["feat(auth): add login", "fix(router): redirect"];
        let counts = ConventionalCounts::tally(&subjects);
        assert_eq!(counts.feat, 0);
        assert_eq!(counts.fix, 0);
    }

    #[test]
    fn tally_matches_markers_anywhere_in_the_line() {
        let subjects = ["revert feat: add login"];
        assert_eq!(ConventionalCounts::tally(&subjects).feat, 1);
    }

    #[test]
    fn one_line_can_increment_several_counters() {
        let subjects = ["feat: add page, fix: typo"];
        let counts = ConventionalCounts::tally(&subjects);
        assert_eq!(counts.feat, 1);
        assert_eq!(counts.fix, 1);
    }

    #[test]
    fn tally_of_nothing_is_zero() {
        let subjects: [&str; 0] = [];
        let counts = ConventionalCounts::tally(&subjects);
        assert!(counts.maintenance_only());
        assert_eq!(counts.docs + counts.chore, 0);
    }

    // ── from_counts ────────────────────────────────────────────────

    #[test]
    fn features_suggest_minor() {
        let suggestion = LogSuggestion::from_subjects(&[
            "feat: add dashboard",
            "feat: add export",
            "fix: header overlap",
        ]);
        assert_eq!(suggestion.bump, VersionBump::Minor);
        assert_eq!(suggestion.rationale, "2 new feature(s) detected");
        assert!(suggestion.note.is_none());
    }

    #[test]
    fn fixes_without_features_suggest_patch() {
        let suggestion = LogSuggestion::from_subjects(&["fix: header overlap"]);
        assert_eq!(suggestion.bump, VersionBump::Patch);
        assert_eq!(suggestion.rationale, "1 bug fix(es) detected");
        assert!(suggestion.note.is_none());
    }

    #[test]
    fn docs_and_chores_suggest_patch_with_note() {
        let suggestion =
            LogSuggestion::from_subjects(&["docs: rewrite quickstart", "chore: bump deps"]);
        assert_eq!(suggestion.bump, VersionBump::Patch);
        assert_eq!(
            suggestion.rationale,
            "documentation or maintenance changes only"
        );
        assert!(suggestion.note.is_some());
    }

    #[test]
    fn unmarked_history_suggests_patch_without_note() {
        let suggestion = LogSuggestion::from_subjects(&["tidy things up", "wip"]);
        assert_eq!(suggestion.bump, VersionBump::Patch);
        assert!(suggestion.note.is_none());
    }
}
