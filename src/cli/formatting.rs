//! Shared display formatting helpers for release CLI commands.
//!
//! This module contains pure functions used by the `analyze`, `suggest`,
//! `status`, and `verify` command modules to keep their terminal output
//! consistent and unit-testable.

use colored::{ColoredString, Colorize};

use crate::version::VersionBump;

/// Returns an emoji icon for a two-character git status code.
///
/// Porcelain status letters are checked in order of interest: additions,
/// modifications, deletions, renames, and copies each get their own icon.
/// Anything else, including untracked `??` entries, falls back to a
/// question mark.
pub(crate) fn status_icon(status: &str) -> &'static str {
    if status.contains('A') {
        "\u{1f4c1}"
    } else if status.contains('M') {
        "\u{1f4dd}"
    } else if status.contains('D') {
        "\u{1f5d1}\u{fe0f}"
    } else if status.contains('R') {
        "\u{1f504}"
    } else if status.contains('C') {
        "\u{1f4cb}"
    } else {
        "\u{2753}"
    }
}

/// Returns a checkmark or cross icon for a setup check result.
pub(crate) fn check_icon(present: bool) -> &'static str {
    if present {
        "\u{2705}"
    } else {
        "\u{274c}"
    }
}

/// Formats a section heading with an underline of matching width.
pub(crate) fn heading(text: &str) -> String {
    format!("{}\n{}", text.bold(), "=".repeat(text.chars().count()))
}

/// Colors a bump level by impact: red for major, green for minor, yellow
/// for patch.
pub(crate) fn bump_label(bump: VersionBump) -> ColoredString {
    match bump {
        VersionBump::Major => bump.as_str().red(),
        VersionBump::Minor => bump.as_str().green(),
        VersionBump::Patch => bump.as_str().yellow(),
    }
}

/// Formats a single setup check line, flagging missing entries.
pub(crate) fn check_line(label: &str, present: bool) -> String {
    if present {
        format!("{} {label}", check_icon(true))
    } else {
        format!("{} {label} - Missing", check_icon(false))
    }
}

/// Formats a file count with the unit the reports use.
pub(crate) fn file_count(count: usize) -> String {
    format!("{count} file(s)")
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- status_icon ---

    #[test]
    fn status_icon_addition() {
        assert_eq!(status_icon("A "), "\u{1f4c1}");
    }

    #[test]
    fn status_icon_modification() {
        assert_eq!(status_icon(" M"), "\u{1f4dd}");
    }

    #[test]
    fn status_icon_deletion() {
        assert_eq!(status_icon("D "), "\u{1f5d1}\u{fe0f}");
    }

    #[test]
    fn status_icon_rename_and_copy() {
        assert_eq!(status_icon("R "), "\u{1f504}");
        assert_eq!(status_icon("C "), "\u{1f4cb}");
    }

    #[test]
    fn status_icon_untracked_falls_back() {
        assert_eq!(status_icon("??"), "\u{2753}");
    }

    #[test]
    fn status_icon_addition_wins_over_modification() {
        // Index add with a worktree edit still reads as an addition.
        assert_eq!(status_icon("AM"), "\u{1f4c1}");
    }

    // --- check_icon / check_line ---

    #[test]
    fn check_icon_present() {
        assert_eq!(check_icon(true), "\u{2705}");
    }

    #[test]
    fn check_icon_missing() {
        assert_eq!(check_icon(false), "\u{274c}");
    }

    #[test]
    fn check_line_present() {
        assert_eq!(
            check_line(".husky/commit-msg", true),
            "\u{2705} .husky/commit-msg"
        );
    }

    #[test]
    fn check_line_missing_is_flagged() {
        insta::assert_snapshot!(
            check_line("commitlint.config.js", false),
            @"\u{274c} commitlint.config.js - Missing"
        );
    }

    // --- heading ---

    #[test]
    fn heading_underline_matches_width() {
        colored::control::set_override(false);
        assert_eq!(heading("Release Status"), "Release Status\n==============");
    }

    // --- bump_label ---

    #[test]
    fn bump_label_keeps_the_level_text() {
        for bump in [VersionBump::Major, VersionBump::Minor, VersionBump::Patch] {
            assert!(bump_label(bump).to_string().contains(bump.as_str()));
        }
    }

    // --- file_count ---

    #[test]
    fn file_count_unit() {
        assert_eq!(file_count(3), "3 file(s)");
    }
}
