use crate::StatusReport;

/// Tray icon frames. Exactly one is shown at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconState {
    /// Client not running or not reachable.
    Offline,
    /// Client running and up to date.
    Idle,
    /// First frame of the busy animation.
    Busy,
    /// Second frame of the busy animation.
    BusyAlt,
    /// Error badge.
    Error,
}

impl IconState {
    /// Every icon state, in resource order.
    pub const ALL: [IconState; 5] = [
        IconState::Offline,
        IconState::Idle,
        IconState::Busy,
        IconState::BusyAlt,
        IconState::Error,
    ];

    /// Resource file backing this icon.
    pub const fn file_name(self) -> &'static str {
        match self {
            IconState::Offline => "offline.png",
            IconState::Idle => "idle.png",
            IconState::Busy => "busy.png",
            IconState::BusyAlt => "busy2.png",
            IconState::Error => "error.png",
        }
    }

    /// Icon to show for `report` when `self` is the icon currently shown.
    ///
    /// Busy reports flip between [`IconState::Busy`] and [`IconState::BusyAlt`]
    /// on every call, so consecutive busy ticks never repeat a frame.
    pub fn next(self, report: &StatusReport) -> IconState {
        if !report.is_running() {
            IconState::Offline
        } else if !report.is_busy() {
            IconState::Idle
        } else if self == IconState::Busy {
            IconState::BusyAlt
        } else {
            IconState::Busy
        }
    }
}
