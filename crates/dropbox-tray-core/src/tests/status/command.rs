use crate::{CoreError, StatusCommand};

/// WHAT: Stdout lines are returned in order without blank lines
/// WHY: Classification relies on line order and ignores empty entries
#[test]
#[allow(clippy::unwrap_used)]
fn given_multiline_output_when_querying_then_non_empty_lines_in_order() {
    // Given: A command printing two entries separated by a blank line
    let command = StatusCommand::new("sh", ["-c", "printf 'Syncing 3 files\\n\\nUp to date\\n'"]);

    // When: Querying it
    let lines = command.query().unwrap();

    // Then: Both entries, in order, blank line dropped
    assert_eq!(lines, vec!["Syncing 3 files", "Up to date"]);
}

/// WHAT: Non-zero exit status is ignored
/// WHY: Only stdout carries the status
#[test]
#[allow(clippy::unwrap_used)]
fn given_failing_exit_code_when_querying_then_output_still_returned() {
    // Given: A command that prints then exits with failure
    let command = StatusCommand::new("sh", ["-c", "echo \"Dropbox isn't running!\"; exit 3"]);

    // When: Querying it
    let lines = command.query().unwrap();

    // Then: Output is still returned
    assert_eq!(lines, vec!["Dropbox isn't running!"]);
}

/// WHAT: Missing program reports StatusCommandFailed
/// WHY: Callers decide how to present an absent client
#[test]
fn given_missing_program_when_querying_then_status_command_failed() {
    // Given: A program that does not exist
    let command = StatusCommand::new("/nonexistent/dropbox-cli", ["status"]);

    // When: Querying it
    let result = command.query();

    // Then: Spawn failure surfaces as StatusCommandFailed
    assert!(matches!(
        result,
        Err(CoreError::StatusCommandFailed { ref program, .. }) if program == "/nonexistent/dropbox-cli"
    ));
}
