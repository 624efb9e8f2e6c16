// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Release tags: show the latest version and create the next one.

use std::path::Path;

use rf_core::{latest_tag, Bump, SemanticVersion};

use crate::colors;
use crate::error::Result;
use crate::git;
use crate::prompt;

/// Whether a freshly created tag is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PushChoice {
    Always,
    Never,
    Ask,
}

impl PushChoice {
    /// `--push` or `--yes` push without asking; otherwise ask on a terminal.
    fn from_flags(push: bool, yes: bool) -> Self {
        if push || yes {
            PushChoice::Always
        } else if prompt::is_interactive() {
            PushChoice::Ask
        } else {
            PushChoice::Never
        }
    }
}

pub fn show() -> Result<()> {
    let dir = std::env::current_dir()?;
    match show_impl(&dir)? {
        Some(version) => println!("{}", version),
        None => println!("No version tags found"),
    }
    Ok(())
}

pub(crate) fn show_impl(dir: &Path) -> Result<Option<SemanticVersion>> {
    git::ensure_repository(dir)?;
    Ok(latest_tag(git::tags(dir)?))
}

pub fn bump(bump: Option<Bump>, push: bool, yes: bool) -> Result<()> {
    let dir = std::env::current_dir()?;
    let version = bump_impl(&dir, bump, yes, PushChoice::from_flags(push, yes))?;
    println!("{} {}", colors::ok("tagged"), version);
    Ok(())
}

pub(crate) fn bump_impl(
    dir: &Path,
    bump: Option<Bump>,
    yes: bool,
    push: PushChoice,
) -> Result<SemanticVersion> {
    git::ensure_repository(dir)?;
    let current = latest_tag(git::tags(dir)?);
    let next = next_version(current, bump, yes)?;

    git::create_tag(dir, &next)?;
    tracing::debug!("created tag {}", next);

    let should_push = match push {
        PushChoice::Always => true,
        PushChoice::Never => false,
        PushChoice::Ask => prompt::confirm(&format!("Push {} to origin?", next))?,
    };
    if should_push {
        git::push_tags(dir)?;
        println!("{} tags", colors::ok("pushed"));
    }
    Ok(next)
}

/// The version to tag next.
///
/// With no tags yet this is always `v0.1.0`. Otherwise the bump is the one
/// given, patch under `--yes`, or picked interactively.
pub(crate) fn next_version(
    current: Option<SemanticVersion>,
    bump: Option<Bump>,
    yes: bool,
) -> Result<SemanticVersion> {
    let Some(current) = current else {
        if let Some(bump) = bump {
            tracing::debug!("no version tags yet, ignoring {} bump", bump);
        }
        return Ok(SemanticVersion::initial());
    };
    let bump = match (bump, yes) {
        (Some(bump), _) => bump,
        (None, true) => Bump::Patch,
        (None, false) => prompt::pick_bump(&current)?,
    };
    Ok(current.bump(bump)?)
}

#[cfg(test)]
#[path = "tag_tests.rs"]
mod tests;
