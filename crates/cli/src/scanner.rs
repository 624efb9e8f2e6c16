// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TODO scanner.
//!
//! Walks the files directly inside a directory (no recursion), numbers each
//! new `TODO: ` line with the next ticket, files an issue for it, and writes
//! the file back only when a line changed. Already-numbered markers are
//! collected so stale issues can be closed after a complete pass.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rf_core::{
    classify_line, issue_body, mark_line, stale_issues, IssueRecord, LineKind, TodoMarker,
};

use crate::config::{ErrorPolicy, ScanConfig};
use crate::error::{Error, Result};
use crate::tracker::Tracker;

/// Which files a scan visits and how it reacts to unreadable ones.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOptions {
    pub ignored_files: Vec<String>,
    pub ignored_extensions: Vec<String>,
    pub on_error: ErrorPolicy,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions::from_config(&ScanConfig::default())
    }
}

impl ScanOptions {
    pub fn from_config(config: &ScanConfig) -> Self {
        ScanOptions {
            ignored_files: config.ignored_files.clone(),
            ignored_extensions: config.ignored_extensions.clone(),
            on_error: config.on_error,
        }
    }

    /// True if a file with this name should be scanned.
    ///
    /// Names without a `.` are skipped, as are names containing any ignored
    /// extension anywhere (so `notes.md.bak` is skipped too).
    pub fn is_candidate(&self, name: &str) -> bool {
        if self.ignored_files.iter().any(|f| f == name) {
            return false;
        }
        if !name.contains('.') {
            return false;
        }
        !self
            .ignored_extensions
            .iter()
            .any(|ext| name.contains(ext.as_str()))
    }
}

/// What went wrong for a single file or line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Read,
    Write,
    CreateIssue,
    CloseIssue,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Read => "read",
            FailureKind::Write => "write",
            FailureKind::CreateIssue => "create issue",
            FailureKind::CloseIssue => "close issue",
        }
    }
}

/// A per-item failure recorded while the pass carried on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFailure {
    pub kind: FailureKind,
    pub path: Option<PathBuf>,
    pub line: Option<usize>,
    pub ticket: Option<u64>,
    pub message: String,
}

impl fmt::Display for ScanFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed", self.kind.as_str())?;
        if let Some(ticket) = self.ticket {
            write!(f, " for #{}", ticket)?;
        }
        match (&self.path, self.line) {
            (Some(path), Some(line)) => write!(f, " ({}:{})", path.display(), line)?,
            (Some(path), None) => write!(f, " ({})", path.display())?,
            _ => {}
        }
        write!(f, ": {}", self.message)
    }
}

/// Outcome of one scan pass.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Names of the files read and checked for TODOs.
    pub scanned_files: Vec<String>,
    /// Files whose content changed and was written back.
    pub files_rewritten: Vec<PathBuf>,
    /// Files skipped because they are not valid UTF-8.
    pub skipped_binary: Vec<PathBuf>,
    /// TODOs numbered during this pass, whether or not filing succeeded.
    pub new_markers: Vec<TodoMarker>,
    /// TODOs that were already numbered.
    pub existing_markers: Vec<TodoMarker>,
    pub failures: Vec<ScanFailure>,
    /// Last ticket number handed out (the seed if none were).
    pub last_ticket: u64,
}

impl ScanReport {
    /// True if at least one new TODO was found.
    pub fn found_any(&self) -> bool {
        !self.new_markers.is_empty()
    }

    /// True if every candidate file was read.
    pub fn is_complete(&self) -> bool {
        !self.failures.iter().any(|f| f.kind == FailureKind::Read)
    }

    /// Issues successfully filed during this pass.
    pub fn issues_created(&self) -> usize {
        let failed = self
            .failures
            .iter()
            .filter(|f| f.kind == FailureKind::CreateIssue)
            .count();
        self.new_markers.len() - failed
    }

    /// Every marker present in source after the pass.
    pub fn markers(&self) -> impl Iterator<Item = &TodoMarker> {
        self.new_markers.iter().chain(self.existing_markers.iter())
    }
}

/// Scan `dir`, number new TODOs starting after `current_issue_count`, and
/// file one issue per new TODO.
///
/// Per-item failures are collected in the report. The only errors returned
/// are an unreadable directory and, under [`ErrorPolicy::Abort`], the first
/// unreadable file.
pub fn scan_and_sync(
    dir: &Path,
    tracker: &dyn Tracker,
    current_issue_count: u64,
    options: &ScanOptions,
) -> Result<ScanReport> {
    let files = candidate_files(dir, options)?;
    scan_files(&files, tracker, current_issue_count, options)
}

/// Scan `paths` in order, writing changed files back in place.
pub fn scan_files(
    paths: &[PathBuf],
    tracker: &dyn Tracker,
    current_issue_count: u64,
    options: &ScanOptions,
) -> Result<ScanReport> {
    scan_files_with(paths, tracker, current_issue_count, options, |path, content| {
        fs::write(path, content)
    })
}

/// [`scan_files`] with the write-back supplied by the caller.
pub(crate) fn scan_files_with<W>(
    paths: &[PathBuf],
    tracker: &dyn Tracker,
    current_issue_count: u64,
    options: &ScanOptions,
    write_back: W,
) -> Result<ScanReport>
where
    W: Fn(&Path, &str) -> io::Result<()>,
{
    let mut report = ScanReport::default();
    let mut counter = current_issue_count;

    for path in paths {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(source) => match options.on_error {
                ErrorPolicy::Abort => {
                    return Err(Error::ScanAborted {
                        path: path.clone(),
                        source,
                    })
                }
                ErrorPolicy::Skip => {
                    tracing::warn!("cannot read {}: {}", path.display(), source);
                    report.failures.push(ScanFailure {
                        kind: FailureKind::Read,
                        path: Some(path.clone()),
                        line: None,
                        ticket: None,
                        message: source.to_string(),
                    });
                    continue;
                }
            },
        };

        let Ok(text) = String::from_utf8(bytes) else {
            tracing::warn!("skipping {}: not valid UTF-8", path.display());
            report.skipped_binary.push(path.clone());
            continue;
        };

        if let Some(name) = path.file_name() {
            report.scanned_files.push(name.to_string_lossy().into_owned());
        }
        let Some(updated) = sync_file(path, &text, tracker, &mut counter, &mut report) else {
            continue;
        };

        match write_back(path, &updated) {
            Ok(()) => report.files_rewritten.push(path.clone()),
            Err(e) => {
                tracing::warn!("cannot write {}: {}", path.display(), e);
                report.failures.push(ScanFailure {
                    kind: FailureKind::Write,
                    path: Some(path.clone()),
                    line: None,
                    ticket: None,
                    message: e.to_string(),
                });
            }
        }
    }

    report.last_ticket = counter;
    Ok(report)
}

/// Regular files in `dir` that pass [`ScanOptions::is_candidate`], by name.
pub fn candidate_files(dir: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>> {
    let mut files: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if options.is_candidate(&name) {
            files.push((name, path));
        } else {
            tracing::debug!("ignoring {}", name);
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files.into_iter().map(|(_, path)| path).collect())
}

/// Number and file the new TODOs of one file.
///
/// Returns the rewritten content when at least one line changed.
fn sync_file(
    path: &Path,
    text: &str,
    tracker: &dyn Tracker,
    counter: &mut u64,
    report: &mut ScanReport,
) -> Option<String> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut changed = false;
    let mut lines: Vec<String> = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        match classify_line(line) {
            LineKind::Plain => lines.push(line.to_string()),
            LineKind::Marked => {
                report.existing_markers.push(TodoMarker::existing(
                    path.to_path_buf(),
                    line_no,
                    line.to_string(),
                ));
                lines.push(line.to_string());
            }
            LineKind::New => {
                *counter += 1;
                let ticket = *counter;
                let marked = mark_line(line, ticket);
                let marker = TodoMarker::created(path.to_path_buf(), line_no, marked.clone(), ticket);

                match tracker.create_issue(marker.title(), &issue_body(&file_name, line_no)) {
                    Ok(Some(number)) if number != ticket => tracing::warn!(
                        "{}:{} was numbered #{} but the tracker filed it as #{}",
                        path.display(),
                        line_no,
                        ticket,
                        number
                    ),
                    Ok(_) => tracing::debug!("filed #{} from {}:{}", ticket, file_name, line_no),
                    Err(e) => {
                        tracing::warn!("cannot file #{}: {}", ticket, e);
                        report.failures.push(ScanFailure {
                            kind: FailureKind::CreateIssue,
                            path: Some(path.to_path_buf()),
                            line: Some(line_no),
                            ticket: Some(ticket),
                            message: e.to_string(),
                        });
                    }
                }

                report.new_markers.push(marker);
                lines.push(marked);
                changed = true;
            }
        }
    }

    changed.then(|| {
        let mut out = lines.join("\n");
        if text.ends_with('\n') {
            out.push('\n');
        }
        out
    })
}

/// Close open marker issues whose TODO no longer appears in source.
///
/// Only issues filed from one of the files this pass read are considered,
/// and nothing happens unless the pass read every file. Returns the numbers closed;
/// failed closes are appended to the report's failures.
pub fn close_stale(
    tracker: &dyn Tracker,
    report: &mut ScanReport,
    issues: &[IssueRecord],
) -> Vec<u64> {
    if !report.is_complete() {
        tracing::warn!("not closing stale issues: some files could not be read");
        return Vec::new();
    }

    let markers: Vec<TodoMarker> = report.markers().cloned().collect();
    let mut closed = Vec::new();
    for number in stale_issues(&markers, issues, &report.scanned_files) {
        match tracker.close_issue(number) {
            Ok(()) => closed.push(number),
            Err(e) => {
                tracing::warn!("cannot close #{}: {}", number, e);
                report.failures.push(ScanFailure {
                    kind: FailureKind::CloseIssue,
                    path: None,
                    line: None,
                    ticket: Some(number),
                    message: e.to_string(),
                });
            }
        }
    }
    closed
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
