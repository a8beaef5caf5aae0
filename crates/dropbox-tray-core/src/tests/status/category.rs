use crate::StatusCategory;

/// WHAT: Activity labels match by prefix
/// WHY: The CLI appends details such as file counts to activity lines
#[test]
fn given_activity_line_with_details_when_classifying_then_prefix_matches() {
    // Given: Lines carrying extra detail after the label
    let lines = [
        ("Uploading 2 files...", StatusCategory::Uploading),
        ("Syncing 3 files", StatusCategory::Syncing),
        ("Indexing 120 files...", StatusCategory::Indexing),
    ];

    for (line, expected) in lines {
        // When: Looking up the activity category
        let category = StatusCategory::activity_of(line);

        // Then: The prefix decides the category
        assert_eq!(category, Some(expected), "line: {line}");
    }
}

/// WHAT: Idle and Offline are not activity categories
/// WHY: Only activity lines may override the first reported line
#[test]
fn given_idle_or_offline_line_when_checking_activity_then_none() {
    // Given/When/Then: Neither label counts as activity
    assert_eq!(StatusCategory::activity_of("Up to date"), None);
    assert_eq!(StatusCategory::activity_of("Dropbox isn't running!"), None);
}

/// WHAT: Idle and Offline require the whole label
/// WHY: running/busy are decided by exact comparison against these labels
#[test]
fn given_text_extending_idle_label_when_classifying_then_not_idle() {
    // Given: Text that only starts with the Idle label
    let text = "Up to date (paused)";

    // When: Classifying the text
    let category = StatusCategory::of(text);

    // Then: It is not treated as Idle
    assert_eq!(category, None);
    assert_eq!(StatusCategory::of("Up to date"), Some(StatusCategory::Idle));
    assert_eq!(
        StatusCategory::of("Dropbox isn't running!"),
        Some(StatusCategory::Offline)
    );
}
