//! Semantic-version bump arithmetic.

use std::fmt;
use std::str::FromStr;

use semver::{Prerelease, Version};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic-version bump levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionBump {
    /// Breaking change
    Major,
    /// Backwards-compatible functionality
    Minor,
    /// Everything else
    Patch,
}

impl VersionBump {
    /// Keyword form, as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized bump keywords.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown version bump '{0}', expected major, minor or patch")]
pub struct ParseBumpError(String);

impl FromStr for VersionBump {
    type Err = ParseBumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            other => Err(ParseBumpError(other.to_string())),
        }
    }
}

/// Computes the next version for a bump level.
///
/// Minor resets the patch component, major resets both. Any pre-release
/// or build metadata on the current version is discarded. With
/// `prerelease` the result carries the numeric pre-release identifier
/// zero: `1.2.3` bumped minor becomes `1.3.0-0`.
pub fn next_version(current: &Version, bump: VersionBump, prerelease: bool) -> Version {
    let mut next = match bump {
        VersionBump::Major => Version::new(current.major + 1, 0, 0),
        VersionBump::Minor => Version::new(current.major, current.minor + 1, 0),
        VersionBump::Patch => Version::new(current.major, current.minor, current.patch + 1),
    };
    if prerelease {
        next.pre = Prerelease::new("0").unwrap_or(Prerelease::EMPTY);
    }
    next
}
