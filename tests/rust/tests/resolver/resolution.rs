//! Resolution contract: scan order, duplicates, unassigned entries, and
//! severity mapping.

use logtune_core::resolver::resolve;
use logtune_core::{Component, LogLevel, SeverityMap};
use pretty_assertions::assert_eq;
use tests::fixtures;

fn ui() -> Component {
    Component::new("eng", "ui")
}

#[test]
fn empty_profile_gives_fallback() {
    let profile = fixtures::profile(&[]);
    assert_eq!(resolve(&profile, &ui(), &SeverityMap::default()), 0);
}

#[test]
fn single_match_maps_through_severity() {
    let profile = fixtures::profile(&[("eng", "ui", LogLevel::Debug)]);
    assert_eq!(resolve(&profile, &ui(), &SeverityMap::default()), 5);
}

#[test]
fn unrelated_entries_give_fallback() {
    let profile = fixtures::profile(&[
        ("eng", "api", LogLevel::Verbose),
        ("ops", "ui", LogLevel::Debug),
    ]);
    assert_eq!(resolve(&profile, &ui(), &SeverityMap::default()), 0);
}

#[test]
fn later_duplicate_overrides_earlier() {
    let profile = fixtures::profile(&[
        ("eng", "ui", LogLevel::Info),
        ("eng", "api", LogLevel::Debug),
        ("eng", "ui", LogLevel::Verbose),
    ]);
    assert_eq!(resolve(&profile, &ui(), &SeverityMap::default()), 10);
}

#[test]
fn unassigned_entries_are_transparent() {
    // A trailing NotSet entry neither matches nor masks the real assignment.
    let profile = fixtures::profile(&[
        ("eng", "ui", LogLevel::Debug),
        ("eng", "ui", LogLevel::NotSet),
    ]);
    assert_eq!(resolve(&profile, &ui(), &SeverityMap::default()), 5);

    let only_unassigned = fixtures::profile(&[("eng", "ui", LogLevel::NotSet)]);
    assert_eq!(
        resolve(&only_unassigned, &ui(), &SeverityMap::default()),
        0
    );
}

#[test]
fn custom_severity_numbers_apply() {
    let severity = SeverityMap {
        info: 1,
        debug: 7,
        verbose: 9,
        fallback: 3,
    };

    let debug = fixtures::profile(&[("eng", "ui", LogLevel::Debug)]);
    assert_eq!(resolve(&debug, &ui(), &severity), 7);

    let unmatched = fixtures::profile(&[("eng", "api", LogLevel::Info)]);
    assert_eq!(resolve(&unmatched, &ui(), &severity), 3);
}

#[test]
fn assignment_walkthrough() {
    // Assign debug, reassign info, then remove: 5, 0, 0.
    let severity = SeverityMap::default();

    let assigned = fixtures::profile(&[("eng", "ui", LogLevel::Debug)]);
    assert_eq!(resolve(&assigned, &ui(), &severity), 5);

    let reassigned = fixtures::profile(&[("eng", "ui", LogLevel::Info)]);
    assert_eq!(resolve(&reassigned, &ui(), &severity), 0);

    let removed = fixtures::profile(&[]);
    assert_eq!(resolve(&removed, &ui(), &severity), 0);
}
