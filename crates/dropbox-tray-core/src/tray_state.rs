//! Display side of a poll tick.
//!
//! [`TrayState`] remembers what the tray currently shows and pushes only the
//! differences to a [`TraySurface`].

use crate::{IconState, PLACEHOLDER_LABEL, StatusReport};

use tracing::{debug, info, instrument};

/// Rendering target for the indicator, typically an OS tray icon.
pub trait TraySurface {
    /// Error raised by the surface.
    type Error;

    /// Show the given icon frame.
    fn set_icon(&mut self, icon: IconState) -> Result<(), Self::Error>;

    /// Replace the tooltip text.
    fn set_tooltip(&mut self, text: &str) -> Result<(), Self::Error>;
}

/// What a single [`TrayState::apply`] call changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Icon shown after the tick.
    pub icon: IconState,
    /// Whether the icon was pushed to the surface.
    pub icon_changed: bool,
    /// Whether the tooltip was pushed to the surface.
    pub tooltip_changed: bool,
}

/// Current icon and tooltip of the indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayState {
    icon: IconState,
    tooltip: String,
}

impl Default for TrayState {
    fn default() -> Self {
        Self::new()
    }
}

impl TrayState {
    /// Initial state: offline icon with the placeholder tooltip.
    pub fn new() -> Self {
        Self {
            icon: IconState::Offline,
            tooltip: PLACEHOLDER_LABEL.to_string(),
        }
    }

    /// Icon currently shown.
    pub fn icon(&self) -> IconState {
        self.icon
    }

    /// Tooltip currently shown.
    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Apply a status report to the surface.
    ///
    /// The tooltip is written only when its text changes. Busy reports always
    /// advance the icon to the other busy frame. State is updated only for
    /// surface calls that succeed.
    #[instrument(skip(self, report, surface), fields(status = %report.text()))]
    pub fn apply<S: TraySurface>(
        &mut self,
        report: &StatusReport,
        surface: &mut S,
    ) -> Result<TickOutcome, S::Error> {
        let tooltip_changed = self.tooltip != report.text();
        if tooltip_changed {
            surface.set_tooltip(report.text())?;
            self.tooltip = report.text().to_string();
            info!(
                status = %report.text(),
                category = ?report.category(),
                running = report.is_running(),
                busy = report.is_busy(),
                "Status changed"
            );
        }

        let icon = self.icon.next(report);
        let icon_changed = icon != self.icon;
        if icon_changed {
            surface.set_icon(icon)?;
            debug!(from = ?self.icon, to = ?icon, "Icon updated");
            self.icon = icon;
        }

        Ok(TickOutcome {
            icon,
            icon_changed,
            tooltip_changed,
        })
    }
}
