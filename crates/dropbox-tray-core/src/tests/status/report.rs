use crate::{PLACEHOLDER_LABEL, StatusCategory, StatusReport};

/// WHAT: Empty output maps to the placeholder and not running
/// WHY: A missing or silent client must show as offline
#[test]
fn given_no_output_when_classifying_then_placeholder_and_not_running() {
    // Given: No lines at all
    let lines: [&str; 0] = [];

    // When: Building the report
    let report = StatusReport::from_lines(lines);

    // Then: Placeholder text, not running, not busy
    assert_eq!(report.text(), PLACEHOLDER_LABEL);
    assert_eq!(report.category(), None);
    assert!(!report.is_running());
    assert!(!report.is_busy());
}

/// WHAT: Blank lines alone count as no output
/// WHY: Trailing newlines from the CLI must not produce an empty tooltip
#[test]
fn given_only_blank_lines_when_classifying_then_placeholder() {
    // Given: Lines that are all empty
    let lines = ["", ""];

    // When: Building the report
    let report = StatusReport::from_lines(lines);

    // Then: Treated as empty output
    assert_eq!(report.text(), PLACEHOLDER_LABEL);
    assert!(!report.is_running());
}

/// WHAT: "Up to date" is running and idle
/// WHY: Idle icon is shown only for the canonical idle label
#[test]
fn given_up_to_date_when_classifying_then_running_and_idle() {
    // Given: Client reports it is up to date
    let report = StatusReport::from_lines(["Up to date"]);

    // Then: Running, not busy, text kept verbatim
    assert_eq!(report.text(), "Up to date");
    assert_eq!(report.category(), Some(StatusCategory::Idle));
    assert!(report.is_running());
    assert!(!report.is_busy());
}

/// WHAT: An activity line wins over an earlier non-activity line
/// WHY: The tooltip should describe what the client is doing
#[test]
fn given_activity_after_idle_line_when_classifying_then_activity_selected() {
    // Given: Non-activity line followed by an activity line
    let report = StatusReport::from_lines(["Up to date", "Syncing 3 files"]);

    // Then: The activity line is selected and busy
    assert_eq!(report.text(), "Syncing 3 files");
    assert_eq!(report.category(), Some(StatusCategory::Syncing));
    assert!(report.is_running());
    assert!(report.is_busy());
}

/// WHAT: Syncing line listed first is selected and busy
/// WHY: Matches the common two-line CLI output while syncing
#[test]
fn given_syncing_then_up_to_date_when_classifying_then_syncing_selected() {
    // Given: Syncing followed by Up to date
    let report = StatusReport::from_lines(["Syncing 3 files", "Up to date"]);

    // Then: Syncing line is selected
    assert_eq!(report.text(), "Syncing 3 files");
    assert!(report.is_running());
    assert!(report.is_busy());
}

/// WHAT: The first activity line wins when several are present
/// WHY: Selection scans lines in order and stops at the first match
#[test]
fn given_several_activity_lines_when_classifying_then_first_match_selected() {
    // Given: Multiple activity lines after a non-activity line
    let report =
        StatusReport::from_lines(["Connecting...", "Uploading 1 file", "Indexing 4 files"]);

    // Then: The first matching line is selected
    assert_eq!(report.text(), "Uploading 1 file");
    assert_eq!(report.category(), Some(StatusCategory::Uploading));
}

/// WHAT: Without activity lines, the first line is used verbatim
/// WHY: Unknown statuses still surface in the tooltip
#[test]
fn given_unknown_lines_when_classifying_then_first_line_used() {
    // Given: Lines with no canonical prefix
    let report = StatusReport::from_lines(["Starting...", "Up to date"]);

    // Then: First line, running and busy
    assert_eq!(report.text(), "Starting...");
    assert_eq!(report.category(), None);
    assert!(report.is_running());
    assert!(report.is_busy());
}

/// WHAT: Offline label means not running
/// WHY: The CLI prints this line when the daemon is down
#[test]
fn given_offline_label_when_classifying_then_not_running() {
    // Given: Client reports it is not running
    let report = StatusReport::from_lines(["Dropbox isn't running!"]);

    // Then: Not running, not busy
    assert_eq!(report.category(), Some(StatusCategory::Offline));
    assert!(!report.is_running());
    assert!(!report.is_busy());
}

/// WHAT: A later Uploading line does not displace an earlier Syncing line
/// WHY: Line order decides, not the order of the activity categories
#[test]
fn given_syncing_before_uploading_when_classifying_then_syncing_selected() {
    // Given: Syncing reported before Uploading
    let report = StatusReport::from_lines(["Syncing 3 files", "Uploading 1 file"]);

    // Then: The earlier Syncing line is selected
    assert_eq!(report.text(), "Syncing 3 files");
    assert_eq!(report.category(), Some(StatusCategory::Syncing));
}
