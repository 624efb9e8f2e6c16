// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn invalid_tag_display_includes_hint() {
    let err = Error::InvalidTag {
        tag: "v1.x.3".to_string(),
        reason: "minor is not a number".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("v1.x.3"));
    assert!(msg.contains("minor is not a number"));
    assert!(msg.contains("v<major>.<minor>.<patch>"));
}

#[test]
fn invalid_bump_lists_choices() {
    let msg = Error::InvalidBump("huge".to_string()).to_string();
    assert!(msg.contains("huge"));
    assert!(msg.contains("major, minor, patch"));
}

#[test]
fn unsupported_host_names_the_remote() {
    let msg = Error::UnsupportedHost("https://bitbucket.org/a/b".to_string()).to_string();
    assert!(msg.contains("bitbucket.org"));
    assert!(msg.contains("github or gitlab"));
}

#[test]
fn version_overflow_names_the_component() {
    let msg = Error::VersionOverflow {
        version: "v1.2.18446744073709551615".to_string(),
        bump: "patch",
    }
    .to_string();
    assert!(msg.contains("patch bump"));
    assert!(msg.contains("v1.2.18446744073709551615"));
}
