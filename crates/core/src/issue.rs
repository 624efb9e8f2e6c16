// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker-side issue model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Open/closed state of a tracker issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueState {
    type Err = Error;

    /// Accepts GitLab's `opened` as well as GitHub's `open`.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" | "opened" => Ok(IssueState::Open),
            "closed" => Ok(IssueState::Closed),
            _ => Err(Error::InvalidState(s.to_string())),
        }
    }
}

/// An issue as reported by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Tracker-assigned number (GitHub `number`, GitLab `iid`).
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub state: IssueState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_reason: Option<String>,
}

impl IssueRecord {
    pub fn is_open(&self) -> bool {
        self.state == IssueState::Open
    }

    /// File name recorded in a marker issue's body, if the body has the
    /// [`issue_body`] shape.
    pub fn source_file(&self) -> Option<&str> {
        let rest = self.body.trim().strip_prefix(BODY_PREFIX)?;
        let (name, line) = rest.rsplit_once(BODY_LINE)?;
        line.parse::<usize>().ok()?;
        (!name.is_empty()).then_some(name)
    }
}

const BODY_PREFIX: &str = "This is from file ";
const BODY_LINE: &str = " on line ";

/// Body of an issue filed from the TODO at `line` of `file_name`.
pub fn issue_body(file_name: &str, line: usize) -> String {
    format!("{}{}{}{}", BODY_PREFIX, file_name, BODY_LINE, line)
}

/// Starting value for the ticket counter of a scan pass.
///
/// The first new TODO gets `seed + 1`. Using the larger of the issue count
/// and the highest number keeps new tickets clear of existing ones even when
/// the tracker has gaps (deleted issues, numbers shared with pull requests).
pub fn ticket_seed(issues: &[IssueRecord]) -> u64 {
    let count = issues.len() as u64;
    let highest = issues.iter().map(|i| i.number).max().unwrap_or(0);
    count.max(highest)
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
