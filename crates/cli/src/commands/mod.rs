// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod calendar;
pub mod check;
pub mod clone;
pub mod issue;
pub mod issues;
pub mod open;
pub mod scan;
pub mod tag;

use std::path::Path;

use rf_core::RemoteRepo;

use crate::config::Config;
use crate::error::Result;
use crate::git;
use crate::tracker::{self, Credentials, Tracker};

/// Everything a tracker-backed command needs, resolved once.
pub struct TrackerContext {
    pub tracker: Box<dyn Tracker>,
    pub config: Config,
    pub remote: RemoteRepo,
}

/// Resolve the repository, remote, credentials and config for `dir`.
///
/// Fails at the first missing piece, in that order.
pub fn open_tracker(dir: &Path) -> Result<TrackerContext> {
    git::ensure_repository(dir)?;
    let url = git::remote_origin(dir)?;
    let credentials = Credentials::resolve(&url)?;
    let config = Config::load_or_default(dir)?;
    let remote = credentials.remote.clone();
    let tracker = tracker::connect(credentials, &config.tracker)?;
    Ok(TrackerContext {
        tracker,
        config,
        remote,
    })
}

/// Resolve only the remote of `dir`, without credentials.
pub fn open_remote(dir: &Path) -> Result<RemoteRepo> {
    git::ensure_repository(dir)?;
    let url = git::remote_origin(dir)?;
    Ok(RemoteRepo::parse(&url)?)
}
