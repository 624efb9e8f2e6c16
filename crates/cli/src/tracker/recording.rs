// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory tracker for tests.

use std::cell::RefCell;
use std::collections::HashSet;

use rf_core::{issue_body, IssueRecord, IssueState};

use super::Tracker;
use crate::error::{Error, Result};

/// Records every call and serves a fixed issue list.
#[derive(Default)]
pub struct RecordingTracker {
    pub issues: Vec<IssueRecord>,
    pub created: RefCell<Vec<(String, String)>>,
    pub closed: RefCell<Vec<u64>>,
    /// Titles containing any of these fail creation with a 422.
    pub reject_titles: Vec<String>,
    /// Numbers whose close call fails with a 404.
    pub reject_close: HashSet<u64>,
    pub fail_listing: bool,
}

impl RecordingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issues(issues: Vec<IssueRecord>) -> Self {
        RecordingTracker {
            issues,
            ..Self::default()
        }
    }

    pub fn created_titles(&self) -> Vec<String> {
        self.created.borrow().iter().map(|(t, _)| t.clone()).collect()
    }
}

impl Tracker for RecordingTracker {
    fn list_issues(&self) -> Result<Vec<IssueRecord>> {
        if self.fail_listing {
            return Err(Error::Remote {
                operation: "list issues",
                status: 401,
                reason: "Bad credentials".to_string(),
            });
        }
        Ok(self.issues.clone())
    }

    fn create_issue(&self, title: &str, body: &str) -> Result<Option<u64>> {
        if self.reject_titles.iter().any(|t| title.contains(t.as_str())) {
            return Err(Error::Remote {
                operation: "create issue",
                status: 422,
                reason: "Validation Failed".to_string(),
            });
        }
        self.created
            .borrow_mut()
            .push((title.to_string(), body.to_string()));
        Ok(None)
    }

    fn close_issue(&self, number: u64) -> Result<()> {
        if self.reject_close.contains(&number) {
            return Err(Error::Remote {
                operation: "close issue",
                status: 404,
                reason: "Not Found".to_string(),
            });
        }
        self.closed.borrow_mut().push(number);
        Ok(())
    }
}

/// Shorthand for an issue fixture.
pub fn issue(number: u64, title: &str, state: IssueState) -> IssueRecord {
    IssueRecord {
        number,
        title: title.to_string(),
        body: String::new(),
        state,
        state_reason: None,
    }
}

/// An issue filed from the TODO on line 1 of `file_name`.
pub fn marker_issue(number: u64, title: &str, file_name: &str) -> IssueRecord {
    IssueRecord {
        body: issue_body(file_name, 1),
        ..issue(number, title, IssueState::Open)
    }
}
