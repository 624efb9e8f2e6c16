// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TODO marker detection and numbering.
//!
//! A marker is a source line that doubles as its own tracking record. A new
//! TODO contains `TODO: `; once numbered it reads `(#N) TODO: ...`, and the
//! `) TODO` pattern is what stops it from being numbered again.

use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::LazyLock;

/// The literal that gets a ticket prefix inserted in front of it.
pub const TODO_LITERAL: &str = "TODO";

/// A line must contain this to count as a TODO at all.
pub const TODO_TRIGGER: &str = "TODO: ";

/// Present once a TODO has been numbered.
pub const MARKED_PATTERN: &str = ") TODO";

// Compile-time constant pattern, verified by tests.
static TICKET_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"\(#(\d+)\) TODO") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// How a single source line relates to TODO tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Not a TODO line.
    Plain,
    /// A TODO that has not been given a ticket number yet.
    New,
    /// A TODO that already carries a `(#N)` prefix.
    Marked,
}

/// Classify a line by the presence of [`TODO_TRIGGER`] and [`MARKED_PATTERN`].
pub fn classify_line(line: &str) -> LineKind {
    if !line.contains(TODO_TRIGGER) {
        LineKind::Plain
    } else if line.contains(MARKED_PATTERN) {
        LineKind::Marked
    } else {
        LineKind::New
    }
}

/// Insert `(#ticket) ` before the first `TODO` in the line.
pub fn mark_line(line: &str, ticket: u64) -> String {
    line.replacen(TODO_LITERAL, &format!("(#{ticket}) {TODO_LITERAL}"), 1)
}

/// Extract the ticket number from a marked line, if it has one.
///
/// Lines such as `call() TODO: x` classify as marked but carry no number.
pub fn ticket_of(line: &str) -> Option<u64> {
    TICKET_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// A TODO line found during a scan pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoMarker {
    pub path: PathBuf,
    /// 1-based line number.
    pub line: usize,
    /// Line text, after numbering for markers created in this pass.
    pub text: String,
    pub ticket: Option<u64>,
    /// True when the line was already numbered before this pass.
    pub marked: bool,
}

impl TodoMarker {
    /// A TODO that was just numbered in this pass.
    pub fn created(path: PathBuf, line: usize, text: String, ticket: u64) -> Self {
        TodoMarker {
            path,
            line,
            text,
            ticket: Some(ticket),
            marked: false,
        }
    }

    /// A TODO that was already numbered before this pass.
    pub fn existing(path: PathBuf, line: usize, text: String) -> Self {
        let ticket = ticket_of(&text);
        TodoMarker {
            path,
            line,
            text,
            ticket,
            marked: true,
        }
    }

    /// Issue title derived from the marker text.
    pub fn title(&self) -> &str {
        self.text.trim()
    }
}

#[cfg(test)]
#[path = "marker_tests.rs"]
mod tests;
