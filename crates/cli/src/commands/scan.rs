// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use rf_core::ticket_seed;

use crate::colors;
use crate::config::{Config, ErrorPolicy};
use crate::error::{Error, Result};
use crate::scanner::{self, ScanOptions, ScanReport};
use crate::tracker::Tracker;

/// Command-line flags layered over the `[scan]` config section.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanFlags {
    pub abort_on_error: bool,
    pub close_stale: bool,
}

pub fn run(flags: ScanFlags) -> Result<()> {
    let dir = std::env::current_dir()?;
    let ctx = super::open_tracker(&dir)?;
    tracing::debug!("syncing TODOs with {}", ctx.remote.web_url());
    run_impl(&dir, ctx.tracker.as_ref(), &ctx.config, flags)
}

pub(crate) fn run_impl(
    dir: &Path,
    tracker: &dyn Tracker,
    config: &Config,
    flags: ScanFlags,
) -> Result<()> {
    let mut options = ScanOptions::from_config(&config.scan);
    if flags.abort_on_error {
        options.on_error = ErrorPolicy::Abort;
    }
    let close_stale = flags.close_stale || config.scan.close_stale;

    let issues = crate::time_phase!("tracker::list", { tracker.list_issues()? });
    let seed = ticket_seed(&issues);
    tracing::debug!("{} issues on tracker, numbering from #{}", issues.len(), seed + 1);

    let mut report = crate::time_phase!("scan", {
        scanner::scan_and_sync(dir, tracker, seed, &options)?
    });

    let closed = if close_stale {
        crate::time_phase!("reconcile", {
            scanner::close_stale(tracker, &mut report, &issues)
        })
    } else {
        Vec::new()
    };

    print!("{}", format_summary(&report, &closed));

    if report.failures.is_empty() {
        return Ok(());
    }
    for failure in &report.failures {
        eprintln!("{} {}", colors::warn("failed:"), failure);
    }
    Err(Error::PartialFailure {
        succeeded: report.issues_created() + closed.len(),
        failed: report.failures.len(),
    })
}

/// Human-readable outcome of a scan pass.
pub(crate) fn format_summary(report: &ScanReport, closed: &[u64]) -> String {
    let mut out = String::new();
    if !report.found_any() {
        out.push_str("No new TODOs found in this directory\n");
    }
    for marker in &report.new_markers {
        let name = marker
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ticket = marker.ticket.map(|t| format!("#{}", t)).unwrap_or_default();
        out.push_str(&format!(
            "{} {} {}\n",
            colors::ok("created"),
            ticket,
            colors::context(&format!("{}:{}", name, marker.line))
        ));
    }
    for number in closed {
        out.push_str(&format!("{} #{}\n", colors::ok("closed"), number));
    }
    out
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
