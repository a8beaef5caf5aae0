use crate::{IconState, StatusReport};

use std::collections::HashSet;

/// WHAT: Not running always selects the offline icon
/// WHY: Offline display must not depend on the previous frame
#[test]
fn given_offline_report_when_selecting_icon_then_offline() {
    // Given: An offline report
    let report = StatusReport::from_lines(["Dropbox isn't running!"]);

    for current in IconState::ALL {
        // When/Then: Any current icon moves to Offline
        assert_eq!(current.next(&report), IconState::Offline);
    }
}

/// WHAT: Idle report selects the idle icon
/// WHY: Running but not busy shows the idle frame
#[test]
fn given_idle_report_when_selecting_icon_then_idle() {
    let report = StatusReport::from_lines(["Up to date"]);

    assert_eq!(IconState::BusyAlt.next(&report), IconState::Idle);
    assert_eq!(IconState::Offline.next(&report), IconState::Idle);
}

/// WHAT: Busy reports alternate between the two busy frames
/// WHY: The flip is the tray's only animation
#[test]
fn given_busy_report_when_selecting_repeatedly_then_frames_alternate() {
    // Given: A busy report and the idle icon
    let report = StatusReport::from_lines(["Syncing 3 files"]);
    let mut icon = IconState::Idle;

    // When: Selecting icons over several ticks
    let mut frames = Vec::new();
    for _ in 0..4 {
        icon = icon.next(&report);
        frames.push(icon);
    }

    // Then: Busy, BusyAlt, Busy, BusyAlt
    assert_eq!(
        frames,
        vec![
            IconState::Busy,
            IconState::BusyAlt,
            IconState::Busy,
            IconState::BusyAlt
        ]
    );
}

/// WHAT: Every icon has its own resource file
/// WHY: Two states sharing a file would make them indistinguishable
#[test]
fn given_all_icons_when_listing_files_then_unique_png_names() {
    let names: HashSet<&str> = IconState::ALL.iter().map(|icon| icon.file_name()).collect();

    assert_eq!(names.len(), IconState::ALL.len());
    assert!(names.iter().all(|name| name.ends_with(".png")));
}
