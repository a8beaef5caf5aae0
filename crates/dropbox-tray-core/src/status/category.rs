/// Semantic status categories reported by the Dropbox CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    /// Everything synced.
    Idle,
    /// Scanning local files.
    Indexing,
    /// Client is not running.
    Offline,
    /// Downloading or reconciling changes.
    Syncing,
    /// Sending local changes.
    Uploading,
}

impl StatusCategory {
    /// Categories that mark the client as busy, in matching priority order.
    pub const ACTIVITY: [StatusCategory; 3] = [
        StatusCategory::Uploading,
        StatusCategory::Syncing,
        StatusCategory::Indexing,
    ];

    /// Canonical label (or label prefix) printed by the CLI for this category.
    pub const fn label(self) -> &'static str {
        match self {
            StatusCategory::Idle => "Up to date",
            StatusCategory::Indexing => "Indexing",
            StatusCategory::Offline => "Dropbox isn't running!",
            StatusCategory::Syncing => "Syncing",
            StatusCategory::Uploading => "Uploading",
        }
    }

    /// First activity category whose label prefixes `line`.
    pub fn activity_of(line: &str) -> Option<StatusCategory> {
        Self::ACTIVITY
            .into_iter()
            .find(|category| line.starts_with(category.label()))
    }

    /// Category for a selected status text, if it is one the CLI defines.
    ///
    /// Idle and Offline match the whole text; activity categories match by prefix.
    pub fn of(text: &str) -> Option<StatusCategory> {
        if text == StatusCategory::Idle.label() {
            Some(StatusCategory::Idle)
        } else if text == StatusCategory::Offline.label() {
            Some(StatusCategory::Offline)
        } else {
            Self::activity_of(text)
        }
    }
}
