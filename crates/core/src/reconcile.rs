// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Closing tracker issues whose TODO marker has left the source.
//!
//! Matching is restricted to marker tickets. An issue is only a candidate
//! when its own title carries `(#<its number>) TODO`, i.e. it was filed from
//! a marker, and its body names a file read by the pass. Hand-written issues
//! and markers living outside the scanned files are never closed.

use std::collections::HashSet;

use crate::issue::IssueRecord;
use crate::marker::{ticket_of, TodoMarker};

/// Numbers of open, marker-filed issues with no marker left in source.
///
/// `scanned_files` are the names of the files the pass read; an issue whose
/// body points anywhere else is left alone. `markers` must come from a
/// complete scan, otherwise a marker in an unread file would look removed.
pub fn stale_issues<S: AsRef<str>>(
    markers: &[TodoMarker],
    issues: &[IssueRecord],
    scanned_files: &[S],
) -> Vec<u64> {
    let present: HashSet<u64> = markers.iter().filter_map(|m| m.ticket).collect();
    let scanned: HashSet<&str> = scanned_files.iter().map(AsRef::as_ref).collect();

    let mut stale: Vec<u64> = issues
        .iter()
        .filter(|issue| issue.is_open())
        .filter(|issue| filed_from_marker(issue))
        .filter(|issue| issue.source_file().is_some_and(|f| scanned.contains(f)))
        .map(|issue| issue.number)
        .filter(|number| !present.contains(number))
        .collect();
    stale.sort_unstable();
    stale.dedup();
    stale
}

fn filed_from_marker(issue: &IssueRecord) -> bool {
    ticket_of(&issue.title) == Some(issue.number)
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
