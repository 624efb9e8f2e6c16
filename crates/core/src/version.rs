// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Semantic version tags of the form `v<major>.<minor>.<patch>`.
//!
//! [`latest_tag`] picks the numerically greatest version out of raw
//! `git tag` output, skipping anything malformed with a warning.
//! [`SemanticVersion::bump`] derives the next release.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Tags shorter than this cannot hold `v0.0.0`-style content.
const MIN_TAG_LEN: usize = 4;

/// A parsed `v<major>.<minor>.<patch>` tag.
///
/// Field order gives the derived ordering: major, then minor, then patch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemanticVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
        }
    }

    /// The version created when a repository has no tags yet.
    pub fn initial() -> Self {
        SemanticVersion::new(0, 1, 0)
    }

    /// Increment one component and zero every lower-priority component.
    ///
    /// Fails when the component is already `u64::MAX`.
    pub fn bump(self, bump: Bump) -> Result<Self> {
        let overflow = || Error::VersionOverflow {
            version: self.to_string(),
            bump: bump.as_str(),
        };
        Ok(match bump {
            Bump::Major => {
                SemanticVersion::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
            }
            Bump::Minor => {
                SemanticVersion::new(self.major, self.minor.checked_add(1).ok_or_else(overflow)?, 0)
            }
            Bump::Patch => SemanticVersion::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        })
    }

    /// The version without its `v` prefix, as used in release messages.
    pub fn bare(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemanticVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_tag(s)
    }
}

/// Which version component to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bump {
    Major,
    Minor,
    Patch,
}

impl Bump {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bump::Major => "major",
            Bump::Minor => "minor",
            Bump::Patch => "patch",
        }
    }
}

impl fmt::Display for Bump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Bump {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "major" => Ok(Bump::Major),
            "minor" => Ok(Bump::Minor),
            "patch" => Ok(Bump::Patch),
            _ => Err(Error::InvalidBump(s.to_string())),
        }
    }
}

/// Parse a single tag string.
///
/// Accepts `v<major>.<minor>.<patch>` with optional trailing components
/// (`v1.2.3.4` reads as `v1.2.3`). Surrounding whitespace is ignored.
pub fn parse_tag(tag: &str) -> Result<SemanticVersion> {
    let tag = tag.trim();
    let invalid = |reason: &str| Error::InvalidTag {
        tag: tag.to_string(),
        reason: reason.to_string(),
    };

    if tag.len() < MIN_TAG_LEN {
        return Err(invalid("too short"));
    }
    let Some(rest) = tag.strip_prefix('v') else {
        return Err(invalid("missing 'v' prefix"));
    };
    if !rest.contains('.') {
        return Err(invalid("no '.' separator"));
    }

    let parts: Vec<&str> = rest.split('.').collect();
    if parts.len() < 3 {
        return Err(invalid("expected three components"));
    }

    let component = |name: &str, raw: &str| {
        raw.parse::<u64>()
            .map_err(|_| invalid(&format!("{name} '{raw}' is not a non-negative integer")))
    };

    Ok(SemanticVersion::new(
        component("major", parts[0])?,
        component("minor", parts[1])?,
        component("patch", parts[2])?,
    ))
}

/// Find the greatest version among raw tag strings.
///
/// Empty lines are ignored silently, malformed tags are skipped with a
/// warning. `v0.0.0` acts as the floor: only a version strictly greater than
/// it counts, so `None` means "no usable tag" rather than a parse failure.
pub fn latest_tag<I, S>(tags: I) -> Option<SemanticVersion>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut latest = SemanticVersion::default();
    let mut found = false;

    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() {
            continue;
        }
        match parse_tag(tag) {
            Ok(version) if version > latest => {
                latest = version;
                found = true;
            }
            Ok(_) => {}
            Err(Error::InvalidTag { reason, .. }) => {
                tracing::warn!("skipping tag {}: {}", tag, reason)
            }
            Err(e) => tracing::warn!("skipping tag {}: {}", tag, e),
        }
    }

    found.then_some(latest)
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
