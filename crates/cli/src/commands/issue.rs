// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hand-filed issues: `issue new` and `issue close`.

use crate::colors;
use crate::error::{Error, Result};
use crate::tracker::Tracker;

pub fn new(title: String, body: Option<String>) -> Result<()> {
    let dir = std::env::current_dir()?;
    let ctx = super::open_tracker(&dir)?;
    let number = new_impl(ctx.tracker.as_ref(), &title, body.as_deref())?;
    match number {
        Some(n) => println!("{} #{} {}", colors::ok("created"), n, title.trim()),
        None => println!("{} {}", colors::ok("created"), title.trim()),
    }
    Ok(())
}

pub(crate) fn new_impl(tracker: &dyn Tracker, title: &str, body: Option<&str>) -> Result<Option<u64>> {
    let title = title.trim();
    if title.is_empty() {
        return Err(Error::Config("issue title cannot be empty".to_string()));
    }
    tracker.create_issue(title, body.unwrap_or_default())
}

pub fn close(number: u64) -> Result<()> {
    let dir = std::env::current_dir()?;
    let ctx = super::open_tracker(&dir)?;
    close_impl(ctx.tracker.as_ref(), number)?;
    println!("{} #{}", colors::ok("closed"), number);
    Ok(())
}

pub(crate) fn close_impl(tracker: &dyn Tracker, number: u64) -> Result<()> {
    tracker.close_issue(number)
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
