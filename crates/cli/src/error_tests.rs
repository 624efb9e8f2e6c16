// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

#[test]
fn test_error_not_a_repository_display() {
    let msg = Error::NotARepository.to_string();
    assert!(msg.contains("not a git repository"));
    assert!(msg.contains("hint"));
}

#[test]
fn test_error_token_missing_and_empty_are_distinct() {
    let missing = Error::TokenMissing("GH_PERSONAL_TOKEN").to_string();
    let empty = Error::TokenEmpty("GH_PERSONAL_TOKEN").to_string();
    assert!(missing.contains("no GH_PERSONAL_TOKEN in the environment"));
    assert!(empty.contains("GH_PERSONAL_TOKEN is empty"));
    assert_ne!(missing, empty);
}

#[test]
fn test_error_remote_display() {
    let err = Error::Remote {
        operation: "create issue",
        status: 422,
        reason: "Validation failed".to_string(),
    };
    assert_eq!(err.to_string(), "create issue failed: 422 Validation failed");
}

#[test]
fn test_error_scan_aborted_names_file() {
    let err = Error::ScanAborted {
        path: PathBuf::from("locked.rs"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    let msg = err.to_string();
    assert!(msg.contains("locked.rs"));
    assert!(msg.contains("denied"));
}

#[test]
fn test_error_from_domain_keeps_message() {
    let err: Error = rf_core::Error::InvalidBump("huge".to_string()).into();
    assert!(err.to_string().starts_with("invalid bump: 'huge'"));
}

#[test]
fn test_error_partial_failure_display() {
    let err = Error::PartialFailure {
        succeeded: 3,
        failed: 1,
    };
    assert!(err.to_string().contains("3 succeeded, 1 failed"));
}

#[test]
fn test_error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(err.to_string().contains("io error"));
}

#[test]
fn test_error_from_json() {
    let result: std::result::Result<i32, serde_json::Error> = serde_json::from_str("invalid");
    let err: Error = result.unwrap_err().into();
    assert!(err.to_string().contains("json error"));
}
