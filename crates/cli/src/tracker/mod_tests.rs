// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde_json::json;

#[test]
fn test_endpoint_appends_segments() {
    let url = endpoint("https://api.github.com", &["repos", "acme", "widgets", "issues"]).unwrap();
    assert_eq!(url.as_str(), "https://api.github.com/repos/acme/widgets/issues");
}

#[test]
fn test_endpoint_keeps_base_path() {
    let url = endpoint("https://gitlab.example.com/api/v4/", &["projects"]).unwrap();
    assert_eq!(url.as_str(), "https://gitlab.example.com/api/v4/projects");
}

#[test]
fn test_endpoint_encodes_namespace_slashes() {
    let url = endpoint(
        "https://gitlab.com/api/v4",
        &["projects", "group/sub/repo", "issues"],
    )
    .unwrap();
    assert_eq!(
        url.as_str(),
        "https://gitlab.com/api/v4/projects/group%2Fsub%2Frepo/issues"
    );
}

#[test]
fn test_endpoint_rejects_invalid_base() {
    let err = endpoint("not a url", &["repos"]).unwrap_err();
    assert!(err.to_string().contains("invalid api url"));
}

#[test]
fn test_error_message_prefers_message_field() {
    let body = json!({ "message": "Bad credentials", "documentation_url": "x" });
    assert_eq!(error_message(&body).as_deref(), Some("Bad credentials"));
}

#[test]
fn test_error_message_gitlab_error_field() {
    let body = json!({ "error": "insufficient_scope" });
    assert_eq!(error_message(&body).as_deref(), Some("insufficient_scope"));
}

#[test]
fn test_error_message_structured() {
    let body = json!({ "message": { "title": ["is too long"] } });
    assert_eq!(
        error_message(&body).as_deref(),
        Some(r#"{"title":["is too long"]}"#)
    );
}

#[test]
fn test_error_message_absent() {
    assert_eq!(error_message(&json!({ "id": 1 })), None);
}

fn parse_number_only(item: &Value) -> Option<IssueRecord> {
    Some(IssueRecord {
        number: item.get("number")?.as_u64()?,
        title: String::new(),
        body: String::new(),
        state: rf_core::IssueState::Open,
        state_reason: None,
    })
}

#[test]
fn test_parse_page_skips_malformed_items() {
    let body = json!([{ "number": 1 }, { "number": "two" }, {}, { "number": 4 }]);
    let issues = parse_page("list issues", body, parse_number_only).unwrap();
    let numbers: Vec<u64> = issues.iter().map(|i| i.number).collect();
    assert_eq!(numbers, vec![1, 4]);
}

#[test]
fn test_parse_page_skips_gitlab_items_keyed_by_iid() {
    let body = json!([{ "iid": 7 }, { "number": 2 }]);
    let issues = parse_page("list issues", body, parse_number_only).unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].number, 2);
}

#[test]
fn test_parse_page_rejects_non_array() {
    let body = json!({ "message": "Not Found" });
    let err = parse_page("list issues", body, parse_number_only).unwrap_err();
    assert!(matches!(err, Error::Remote { operation: "list issues", .. }));
}

#[test]
fn test_credentials_reject_unsupported_host() {
    let err = Credentials::resolve("https://bitbucket.org/acme/widgets.git").unwrap_err();
    assert!(matches!(
        err,
        Error::Domain(rf_core::Error::UnsupportedHost(_))
    ));
}

#[test]
fn test_http_client_builds() {
    assert!(http_client(5).is_ok());
}
