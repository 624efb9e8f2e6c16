// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn v(major: u64, minor: u64, patch: u64) -> SemanticVersion {
    SemanticVersion::new(major, minor, patch)
}

#[parameterized(
    simple = { "v1.2.3", v(1, 2, 3) },
    zeros = { "v0.0.1", v(0, 0, 1) },
    large = { "v10.20.30", v(10, 20, 30) },
    trailing_component = { "v1.2.3.4", v(1, 2, 3) },
    surrounding_whitespace = { "  v4.5.6\n", v(4, 5, 6) },
)]
fn parse_tag_valid(input: &str, expected: SemanticVersion) {
    assert_eq!(parse_tag(input).unwrap(), expected);
}

#[parameterized(
    empty = { "" },
    too_short = { "v1." },
    no_prefix = { "1.2.3" },
    no_dot = { "version" },
    two_components = { "v1.2" },
    letters = { "v1.x.3" },
    prerelease = { "v1.2.3-rc1" },
    negative = { "v-1.2.3" },
    release_word = { "release-1.0" },
)]
fn parse_tag_invalid(input: &str) {
    assert!(parse_tag(input).is_err());
}

#[test]
fn display_round_trips_through_from_str() {
    let version: SemanticVersion = "v3.1.4".parse().unwrap();
    assert_eq!(version.to_string(), "v3.1.4");
    assert_eq!(version.bare(), "3.1.4");
}

#[test]
fn latest_tag_compares_numerically_not_lexically() {
    assert_eq!(latest_tag(["v1.99.0", "v2.0.0"]), Some(v(2, 0, 0)));
    assert_eq!(latest_tag(["v10.0.0", "v9.0.0"]), Some(v(10, 0, 0)));
    assert_eq!(latest_tag(["v1.2.10", "v1.2.9"]), Some(v(1, 2, 10)));
}

#[test]
fn latest_tag_is_order_independent() {
    let tags = ["v0.3.0", "v1.0.0", "v0.9.9", "v1.0.1", "v0.10.0"];
    let mut reversed = tags;
    reversed.reverse();
    assert_eq!(latest_tag(tags), Some(v(1, 0, 1)));
    assert_eq!(latest_tag(reversed), Some(v(1, 0, 1)));
}

#[test]
fn latest_tag_skips_malformed_entries() {
    let tags = [
        "",
        "v1.0.0",
        "nightly",
        "v9",
        "v3.x.0",
        "release-7.0.0",
        "v2.1.0",
        "v",
    ];
    assert_eq!(latest_tag(tags), Some(v(2, 1, 0)));
}

#[test]
fn latest_tag_parses_git_tag_output() {
    let output = "v0.1.0\nv0.2.0\nv0.10.0\n";
    assert_eq!(latest_tag(output.lines()), Some(v(0, 10, 0)));
}

#[test]
fn latest_tag_none_when_nothing_valid() {
    assert_eq!(latest_tag(Vec::<String>::new()), None);
    assert_eq!(latest_tag(["", "latest", "stable"]), None);
}

#[test]
fn latest_tag_single_entry_is_still_validated() {
    assert_eq!(latest_tag(["v0.4.2"]), Some(v(0, 4, 2)));
    assert_eq!(latest_tag(["not-a-version"]), None);
}

#[test]
fn latest_tag_zero_version_is_the_floor() {
    assert_eq!(latest_tag(["v0.0.0"]), None);
    assert_eq!(latest_tag(["v0.0.0", "v0.0.1"]), Some(v(0, 0, 1)));
}

#[parameterized(
    major = { Bump::Major, v(2, 0, 0) },
    minor = { Bump::Minor, v(1, 3, 0) },
    patch = { Bump::Patch, v(1, 2, 4) },
)]
fn bump_zeroes_lower_components(bump: Bump, expected: SemanticVersion) {
    assert_eq!(v(1, 2, 3).bump(bump).unwrap(), expected);
}

#[parameterized(
    major = { Bump::Major, v(u64::MAX, 0, 0) },
    minor = { Bump::Minor, v(1, u64::MAX, 0) },
    patch = { Bump::Patch, v(1, 2, u64::MAX) },
)]
fn bump_at_component_maximum_fails(bump: Bump, current: SemanticVersion) {
    assert!(matches!(
        current.bump(bump),
        Err(Error::VersionOverflow { .. })
    ));
}

#[test]
fn bump_of_largest_parsed_tag_fails_instead_of_wrapping() {
    let latest = latest_tag(["v18446744073709551615.0.0", "v1.0.0"]).unwrap();
    assert_eq!(latest.major, u64::MAX);
    let err = latest.bump(Bump::Major).unwrap_err();
    assert!(err.to_string().contains("major"));
    assert_eq!(latest.bump(Bump::Minor).unwrap(), v(u64::MAX, 1, 0));
}

#[test]
fn initial_version_is_v0_1_0() {
    assert_eq!(SemanticVersion::initial().to_string(), "v0.1.0");
}

#[parameterized(
    major = { "major", Bump::Major },
    minor_upper = { "MINOR", Bump::Minor },
    patch_padded = { " patch ", Bump::Patch },
)]
fn bump_from_str_valid(input: &str, expected: Bump) {
    assert_eq!(input.parse::<Bump>().unwrap(), expected);
}

#[test]
fn bump_from_str_invalid() {
    assert_eq!(
        "huge".parse::<Bump>(),
        Err(Error::InvalidBump("huge".to_string()))
    );
}
