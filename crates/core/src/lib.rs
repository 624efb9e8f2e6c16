// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rf-core: Domain logic for repoflow
//!
//! Pure, I/O-free building blocks shared by the repoflow CLI: semantic
//! version tags, TODO marker classification, the tracker-side issue model,
//! remote URL parsing, and stale-issue reconciliation.

pub mod error;
pub mod issue;
pub mod marker;
pub mod reconcile;
pub mod remote;
pub mod version;

pub use error::{Error, Result};
pub use issue::{issue_body, ticket_seed, IssueRecord, IssueState};
pub use marker::{classify_line, mark_line, ticket_of, LineKind, TodoMarker};
pub use reconcile::stale_issues;
pub use remote::{HostKind, RemoteRepo};
pub use version::{latest_tag, parse_tag, Bump, SemanticVersion};
