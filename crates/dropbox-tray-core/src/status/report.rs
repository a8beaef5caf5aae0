use crate::{PLACEHOLDER_LABEL, StatusCategory};

/// Classified result of one status query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    text: String,
    category: Option<StatusCategory>,
    running: bool,
}

impl StatusReport {
    /// Classify the lines printed by the status command.
    ///
    /// Blank lines are ignored. The first line starting with an activity label
    /// (Uploading, Syncing, Indexing) is selected, otherwise the first line.
    /// No lines at all yields [`PLACEHOLDER_LABEL`] and counts as not running.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<S> = lines
            .into_iter()
            .filter(|line| !line.as_ref().is_empty())
            .collect();

        let Some(first) = lines.first() else {
            return Self {
                text: PLACEHOLDER_LABEL.to_string(),
                category: None,
                running: false,
            };
        };

        let text = lines
            .iter()
            .map(|line| line.as_ref())
            .find(|line| StatusCategory::activity_of(line).is_some())
            .unwrap_or(first.as_ref())
            .to_string();

        let running = text != StatusCategory::Offline.label();

        Self {
            category: StatusCategory::of(&text),
            text,
            running,
        }
    }

    /// Selected status text, used verbatim as the tooltip.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Category of the selected text, when it matches a canonical label.
    pub fn category(&self) -> Option<StatusCategory> {
        self.category
    }

    /// Whether the client reported itself as running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the client is running and not up to date.
    pub fn is_busy(&self) -> bool {
        self.running && self.text != StatusCategory::Idle.label()
    }
}
