mod category;
mod command;
mod icon_state;
mod report;

pub use {
    category::StatusCategory, command::StatusCommand, icon_state::IconState,
    report::StatusReport,
};

/// Status text shown when the status command reports nothing at all.
///
/// Deliberately distinct from every [`StatusCategory`] label.
pub const PLACEHOLDER_LABEL: &str = "Dropbox";
