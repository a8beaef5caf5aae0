//! Dropbox Tray Core Library
//!
//! Status polling and classification for a Dropbox tray indicator. Queries the
//! sync client's CLI, reduces its output to a [`StatusReport`], and drives any
//! [`TraySurface`] through [`TrayState`].
//!
//! # Example
//!
//! ```no_run
//! use dropbox_tray_core::{ConfigLocator, CoreResult, StatusCommand, StatusPoller};
//!
//! fn main() -> CoreResult<()> {
//!     let folder = ConfigLocator::locate()?;
//!     let poller = StatusPoller::new(StatusCommand::new("dropbox-cli", ["status"]));
//!
//!     let report = poller.poll();
//!     println!("{} ({:?}): {}", folder.display(), report.category(), report.text());
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod poller;
mod status;
mod tray_state;

pub use {
    config::ConfigLocator,
    error::CoreError,
    error::Result as CoreResult,
    poller::StatusPoller,
    status::{IconState, PLACEHOLDER_LABEL, StatusCategory, StatusCommand, StatusReport},
    tray_state::{TickOutcome, TraySurface, TrayState},
};
