// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! GitHub REST client.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;
use reqwest::{Method, Url};
use rf_core::{IssueRecord, RemoteRepo};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{endpoint, ensure_success, parse_page, Tracker, PAGE_SIZE};
use crate::error::Result;

const MEDIA_TYPE: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

pub struct GitHubTracker {
    client: Client,
    api: String,
    owner: String,
    repo: String,
    token: String,
}

impl GitHubTracker {
    pub fn new(client: Client, api: String, remote: &RemoteRepo, token: String) -> Self {
        GitHubTracker {
            client,
            api,
            owner: remote.owner.clone(),
            repo: remote.repo.clone(),
            token,
        }
    }

    fn issues_url(&self, number: Option<u64>) -> Result<Url> {
        let number = number.map(|n| n.to_string());
        let mut segments = vec!["repos", self.owner.as_str(), self.repo.as_str(), "issues"];
        if let Some(n) = number.as_deref() {
            segments.push(n);
        }
        endpoint(&self.api, &segments)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!("github {} {}", method, url);
        self.client
            .request(method, url)
            .bearer_auth(&self.token)
            .header(ACCEPT, MEDIA_TYPE)
            .header("X-GitHub-Api-Version", API_VERSION)
    }
}

impl Tracker for GitHubTracker {
    fn list_issues(&self) -> Result<Vec<IssueRecord>> {
        let url = self.issues_url(None)?;
        let per_page = PAGE_SIZE.to_string();
        let mut issues = Vec::new();
        for page in 1.. {
            let page = page.to_string();
            let response = self
                .request(Method::GET, url.clone())
                .query(&[
                    ("state", "all"),
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
            .json(&json!({ "title": title, "body": body }))
            .send()?;
        let created: Value = ensure_success("create issue", response)?.json()?;
        Ok(created.get("number").and_then(Value::as_u64))
    }

    fn close_issue(&self, number: u64) -> Result<()> {
        let response = self
            .request(Method::PATCH, self.issues_url(Some(number))?)
            .json(&json!({ "state": "closed", "state_reason": "completed" }))
            .send()?;
        ensure_success("close issue", response)?;
        Ok(())
    }
}

/// Map one element of the GitHub issues array.
pub(super) fn parse_issue(item: &Value) -> Option<IssueRecord> {
    Some(IssueRecord {
        number: item.get("number")?.as_u64()?,
        title: item.get("title")?.as_str()?.to_string(),
        body: item
            .get("body")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        state: item.get("state")?.as_str()?.parse().ok()?,
        state_reason: item
            .get("state_reason")
            .and_then(Value::as_str)
            .map(String::from),
    })
}

/// A public repository of a GitHub user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicRepo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    pub clone_url: String,
}

impl GitHubTracker {
    /// Number of public repositories `user` owns.
    pub fn public_repo_count(client: &Client, api: &str, user: &str) -> Result<u64> {
        let url = endpoint(api, &["users", user])?;
        tracing::debug!("github GET {}", url);
        let response = client.get(url).header(ACCEPT, MEDIA_TYPE).send()?;
        let body: Value = ensure_success("look up user", response)?.json()?;
        Ok(body
            .get("public_repos")
            .and_then(Value::as_u64)
            .unwrap_or_default())
    }

    /// Every public repository of `user`, across all pages.
    pub fn public_repos(client: &Client, api: &str, user: &str) -> Result<Vec<PublicRepo>> {
        let url = endpoint(api, &["users", user, "repos"])?;
        let per_page = PAGE_SIZE.to_string();
        let mut repos = Vec::new();
        for page in 1.. {
            let page = page.to_string();
            tracing::debug!("github GET {} page {}", url, page);
            let response = client
                .get(url.clone())
                .header(ACCEPT, MEDIA_TYPE)
                .query(&[("per_page", per_page.as_str()), ("page", page.as_str())])
                .send()?;
            let batch: Vec<PublicRepo> = ensure_success("list repositories", response)?.json()?;
            let count = batch.len();
            repos.extend(batch);
            if count < PAGE_SIZE {
                break;
            }
        }
        Ok(repos)
    }
}

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;
