// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue tracker clients.
//!
//! [`Tracker`] is the seam between the scanner and the hosted tracker. The
//! implementation is picked once per invocation from the remote origin's
//! host: [`GitHubTracker`] or [`GitLabTracker`].

mod github;
mod gitlab;
#[cfg(test)]
pub mod recording;

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::Url;
use rf_core::{HostKind, IssueRecord, RemoteRepo};
use serde_json::Value;

use crate::config::TrackerConfig;
use crate::env;
use crate::error::{Error, Result};

pub use github::{GitHubTracker, PublicRepo};
pub use gitlab::GitLabTracker;

/// Issues per page requested from both hosts.
pub const PAGE_SIZE: usize = 100;

/// Operations the scanner and commands need from a tracker.
pub trait Tracker {
    /// Every issue in the project, open and closed.
    fn list_issues(&self) -> Result<Vec<IssueRecord>>;

    /// Files a new issue. Returns the tracker-assigned number when the
    /// response carries one.
    fn create_issue(&self, title: &str, body: &str) -> Result<Option<u64>>;

    /// Closes an issue as completed.
    fn close_issue(&self, number: u64) -> Result<()>;
}

/// Who to talk to and how to authenticate, resolved once per run.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub remote: RemoteRepo,
    pub token: String,
}

impl Credentials {
    /// Resolve credentials from a remote URL and the host's token variable.
    pub fn resolve(remote_url: &str) -> Result<Self> {
        let remote = RemoteRepo::parse(remote_url)?;
        let token = env::tracker_token(remote.kind)?;
        Ok(Credentials { remote, token })
    }
}

/// Build the tracker client for the credentials' host.
pub fn connect(credentials: Credentials, config: &TrackerConfig) -> Result<Box<dyn Tracker>> {
    let client = http_client(config.timeout_secs)?;
    let Credentials { remote, token } = credentials;
    tracing::debug!("using {} tracker for {}", remote.kind, remote.full_name());
    Ok(match remote.kind {
        HostKind::GitHub => Box::new(GitHubTracker::new(
            client,
            config.github_api.clone(),
            &remote,
            token,
        )),
        HostKind::GitLab => Box::new(GitLabTracker::new(
            client,
            config.gitlab_api_for(&remote.host),
            &remote,
            token,
        )),
    })
}

/// Blocking HTTP client with the configured per-request timeout.
pub fn http_client(timeout_secs: u64) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("repoflow/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Join path segments onto an API base URL, percent-encoding each one.
///
/// A segment containing `/` (a GitLab namespace) becomes `%2F`.
pub fn endpoint(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url =
        Url::parse(base).map_err(|e| Error::Config(format!("invalid api url '{}': {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| Error::Config(format!("api url '{}' cannot take a path", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Turn a non-2xx response into [`Error::Remote`].
///
/// The reason is the API's `message` field when there is one, otherwise the
/// canonical status text.
pub fn ensure_success(operation: &'static str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let fallback = status.canonical_reason().unwrap_or("unknown status").to_string();
    let reason = response
        .json::<Value>()
        .ok()
        .as_ref()
        .and_then(error_message)
        .unwrap_or(fallback);
    Err(Error::Remote {
        operation,
        status: status.as_u16(),
        reason,
    })
}

/// Error text from a GitHub (`message`) or GitLab (`message`/`error`) body.
pub fn error_message(body: &Value) -> Option<String> {
    match body.get("message").or_else(|| body.get("error"))? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Parse a page of issues, skipping items that do not fit the model.
pub fn parse_page(
    operation: &'static str,
    body: Value,
    parse_item: fn(&Value) -> Option<IssueRecord>,
) -> Result<Vec<IssueRecord>> {
    let Value::Array(items) = body else {
        return Err(Error::Remote {
            operation,
            status: 200,
            reason: "expected a JSON array of issues".to_string(),
        });
    };
    Ok(items
        .iter()
        .filter_map(|item| {
            let parsed = parse_item(item);
            if parsed.is_none() {
                let id = item
                    .get("number")
                    .or_else(|| item.get("iid"))
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "without a number".to_string());
                tracing::warn!("{}: skipping malformed issue {}", operation, id);
            }
            parsed
        })
        .collect())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
