// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! GitLab REST v4 client.
//!
//! Projects are addressed by their URL-encoded full path, so subgroup
//! namespaces work without a project-id lookup.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{Method, Url};
use rf_core::{IssueRecord, RemoteRepo};
use serde_json::{json, Value};

use super::{endpoint, ensure_success, parse_page, Tracker, PAGE_SIZE};
use crate::error::Result;

pub struct GitLabTracker {
    client: Client,
    api: String,
    project: String,
    token: String,
}

impl GitLabTracker {
    pub fn new(client: Client, api: String, remote: &RemoteRepo, token: String) -> Self {
        GitLabTracker {
            client,
            api,
            project: remote.full_name(),
            token,
        }
    }

    fn issues_url(&self, iid: Option<u64>) -> Result<Url> {
        let iid = iid.map(|n| n.to_string());
        let mut segments = vec!["projects", self.project.as_str(), "issues"];
        if let Some(n) = iid.as_deref() {
            segments.push(n);
        }
        endpoint(&self.api, &segments)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!("gitlab {} {}", method, url);
        self.client
            .request(method, url)
            .header("PRIVATE-TOKEN", self.token.as_str())
    }
}

impl Tracker for GitLabTracker {
    fn list_issues(&self) -> Result<Vec<IssueRecord>> {
        let url = self.issues_url(None)?;
        let per_page = PAGE_SIZE.to_string();
        let mut issues = Vec::new();
        for page in 1.. {
            let page = page.to_string();
            let response = self
                .request(Method::GET, url.clone())
                .query(&[
                    ("scope", "all"),
                    ("per_page", per_page.as_str()),
                    ("page", page.as_str()),
                ])
                .send()?;
            let body: Value = ensure_success("list issues", response)?.json()?;
            let count = body.as_array().map_or(0, Vec::len);
            issues.extend(parse_page("list issues", body, parse_issue)?);
            if count < PAGE_SIZE {
                break;
            }
        }
        Ok(issues)
    }

    fn create_issue(&self, title: &str, body: &str) -> Result<Option<u64>> {
        let response = self
            .request(Method::POST, self.issues_url(None)?)
            .json(&json!({ "title": title, "description": body }))
            .send()?;
        let created: Value = ensure_success("create issue", response)?.json()?;
        Ok(created.get("iid").and_then(Value::as_u64))
    }

    fn close_issue(&self, number: u64) -> Result<()> {
        let response = self
            .request(Method::PUT, self.issues_url(Some(number))?)
            .json(&json!({ "state_event": "close" }))
            .send()?;
        ensure_success("close issue", response)?;
        Ok(())
    }
}

/// Map one element of the GitLab issues array. `opened` reads as open.
pub(super) fn parse_issue(item: &Value) -> Option<IssueRecord> {
    Some(IssueRecord {
        number: item.get("iid")?.as_u64()?,
        title: item.get("title")?.as_str()?.to_string(),
        body: item
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        state: item.get("state")?.as_str()?.parse().ok()?,
        state_reason: None,
    })
}

#[cfg(test)]
#[path = "gitlab_tests.rs"]
mod tests;
